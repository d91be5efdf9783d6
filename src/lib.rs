//! Made in USA Badge - configurable storefront badge generator
//!
//! This library resolves a badge configuration into concrete styling and
//! generates the snippets a merchant embeds: CSS, HTML, runtime init code,
//! a standalone injection script and a React component.
//!
//! # Example
//!
//! ```rust
//! use made_in_usa_badge::{generate_html_block, BadgeConfig, BadgeStyle};
//!
//! let config = BadgeConfig::new().with_style(BadgeStyle::Ribbon);
//! let html = generate_html_block(&config);
//! assert!(html.contains("MADE IN USA"));
//! assert!(html.contains("#BF0A30"));
//! ```

pub mod assets;
pub mod config;
pub mod defaults;
pub mod error;
pub mod renderer;
pub mod resolver;
pub mod session;

pub use assets::{build_assets, AssetError, AssetManifest};
pub use config::{BadgeConfig, BadgePosition, BadgeSize, BadgeStyle, PartialBadgeConfig};
pub use defaults::DefaultsStore;
pub use error::{BadgeError, ConfigError};
pub use renderer::{
    generate_css_block, generate_html_block, generate_init_snippet, generate_injection_script,
    generate_react_snippet, SnippetConfig, SnippetKind,
};
pub use resolver::{resolve_label, resolve_style_descriptor, StyleDescriptor};
pub use session::{ConfigEdit, ConfiguratorSession};

/// Generate a snippet of the given kind with default snippet settings
///
/// `selector` is only used by the script and inject kinds.
///
/// # Example
///
/// ```rust
/// use made_in_usa_badge::{generate, BadgeConfig, SnippetKind};
///
/// let snippet = generate(SnippetKind::Script, &BadgeConfig::new(), ".product-card").unwrap();
/// assert!(snippet.contains("window.MadeInUSA.init({"));
///
/// assert!(generate(SnippetKind::Script, &BadgeConfig::new(), "  ").is_err());
/// ```
pub fn generate(
    kind: SnippetKind,
    config: &BadgeConfig,
    selector: &str,
) -> Result<String, BadgeError> {
    generate_with_config(kind, config, selector, &SnippetConfig::default())
}

/// Generate a snippet of the given kind with custom snippet settings
///
/// # Example
///
/// ```rust
/// use made_in_usa_badge::{generate_with_config, BadgeConfig, SnippetConfig, SnippetKind};
///
/// let snippet = SnippetConfig::new().with_asset_base_url("https://assets.shop.test/badge/");
/// let config = BadgeConfig::new();
/// let out = generate_with_config(SnippetKind::Script, &config, ".card", &snippet).unwrap();
/// assert!(out.contains("https://assets.shop.test/badge/made-in-usa-badge.js"));
/// ```
pub fn generate_with_config(
    kind: SnippetKind,
    config: &BadgeConfig,
    selector: &str,
    snippet: &SnippetConfig,
) -> Result<String, BadgeError> {
    log::debug!("generating {} snippet", kind);
    match kind {
        SnippetKind::Css => Ok(renderer::generate_css_block_with_config(config, snippet)),
        SnippetKind::Html => Ok(renderer::generate_html_block_with_config(config, snippet)),
        SnippetKind::Script => {
            renderer::generate_init_snippet_with_config(selector, config, snippet)
        }
        SnippetKind::Inject => {
            renderer::generate_injection_script_with_config(selector, config, snippet)
        }
        SnippetKind::React => Ok(renderer::generate_react_snippet_with_config(config, snippet)),
    }
}
