//! Configuration for snippet generation

/// Where the distributed assets are served from when no base URL is given
pub const DEFAULT_ASSET_BASE_URL: &str = "https://cdn.example.com";

/// Configuration options for generated snippets
#[derive(Debug, Clone)]
pub struct SnippetConfig {
    /// Base URL the stylesheet and runtime script are linked from
    pub asset_base_url: String,

    /// Whether to spread CSS rules over indented lines
    pub pretty_print: bool,

    /// Whether to emit explanatory header comments
    pub comments: bool,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            pretty_print: true,
            comments: true,
        }
    }
}

impl SnippetConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset base URL; trailing slashes are dropped
    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set whether to pretty-print CSS
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether to emit header comments
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// Full URL of a distributed asset
    pub fn asset_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.asset_base_url, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnippetConfig::default();
        assert_eq!(config.asset_base_url, "https://cdn.example.com");
        assert!(config.pretty_print);
        assert!(config.comments);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SnippetConfig::new()
            .with_asset_base_url("https://assets.shop.test/badge/")
            .with_pretty_print(false)
            .with_comments(false);

        assert_eq!(config.asset_base_url, "https://assets.shop.test/badge");
        assert!(!config.pretty_print);
        assert!(!config.comments);
        assert_eq!(
            config.asset_url("made-in-usa-badge.js"),
            "https://assets.shop.test/badge/made-in-usa-badge.js"
        );
    }
}
