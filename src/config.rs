//! Badge configuration model
//!
//! A [`BadgeConfig`] is a fully specified value: every field carries a
//! concrete setting. Config files and default updates arrive as
//! [`PartialBadgeConfig`] and are completed against a base config, so a field
//! that is absent always falls back to a documented default.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toml::Spanned;

use crate::error::{BadgeError, ConfigError};

/// Label used when no custom text is set
pub const DEFAULT_LABEL: &str = "MADE IN USA";

/// Shape and color template of the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    Standard,
    Round,
    Ribbon,
    Flag,
}

impl BadgeStyle {
    pub const ALL: [BadgeStyle; 4] = [
        BadgeStyle::Standard,
        BadgeStyle::Round,
        BadgeStyle::Ribbon,
        BadgeStyle::Flag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeStyle::Standard => "standard",
            BadgeStyle::Round => "round",
            BadgeStyle::Ribbon => "ribbon",
            BadgeStyle::Flag => "flag",
        }
    }
}

impl FromStr for BadgeStyle {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| BadgeError::invalid_enum("style", s, &Self::ALL.map(Self::as_str)))
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding and font-size template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeSize {
    Sm,
    Md,
    Lg,
}

impl BadgeSize {
    pub const ALL: [BadgeSize; 3] = [BadgeSize::Sm, BadgeSize::Md, BadgeSize::Lg];

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeSize::Sm => "sm",
            BadgeSize::Md => "md",
            BadgeSize::Lg => "lg",
        }
    }
}

impl FromStr for BadgeSize {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| BadgeError::invalid_enum("size", s, &Self::ALL.map(Self::as_str)))
    }
}

impl fmt::Display for BadgeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of the badge inside its positioned container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl BadgePosition {
    pub const ALL: [BadgePosition; 5] = [
        BadgePosition::TopLeft,
        BadgePosition::TopRight,
        BadgePosition::BottomLeft,
        BadgePosition::BottomRight,
        BadgePosition::Center,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BadgePosition::TopLeft => "top-left",
            BadgePosition::TopRight => "top-right",
            BadgePosition::BottomLeft => "bottom-left",
            BadgePosition::BottomRight => "bottom-right",
            BadgePosition::Center => "center",
        }
    }
}

impl FromStr for BadgePosition {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| BadgeError::invalid_enum("position", s, &Self::ALL.map(Self::as_str)))
    }
}

impl fmt::Display for BadgePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete configuration of a badge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BadgeConfig {
    pub style: BadgeStyle,
    pub size: BadgeSize,
    pub position: BadgePosition,
    /// Hover-scale transition
    pub animated: bool,
    /// Pulsing red shadow
    pub glowing: bool,
    /// Flag glyph before the label
    pub show_icon: bool,
    /// Replaces [`DEFAULT_LABEL`] when set and non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            style: BadgeStyle::Standard,
            size: BadgeSize::Md,
            position: BadgePosition::TopRight,
            animated: true,
            glowing: true,
            show_icon: true,
            custom_text: None,
        }
    }
}

impl BadgeConfig {
    /// Create a new configuration with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_position(mut self, position: BadgePosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_glowing(mut self, glowing: bool) -> Self {
        self.glowing = glowing;
        self
    }

    pub fn with_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// Set the label text; an empty string restores the default label
    pub fn with_custom_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.custom_text = (!text.is_empty()).then_some(text);
        self
    }

    /// The text shown on the badge
    pub fn label(&self) -> &str {
        match self.custom_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_LABEL,
        }
    }
}

/// A badge configuration where any field may be missing
///
/// `custom_text: Some("")` is an explicit request for the default label,
/// while `None` keeps whatever the base config has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialBadgeConfig {
    pub style: Option<BadgeStyle>,
    pub size: Option<BadgeSize>,
    pub position: Option<BadgePosition>,
    pub animated: Option<bool>,
    pub glowing: Option<bool>,
    pub show_icon: Option<bool>,
    pub custom_text: Option<String>,
}

/// TOML shape of a badge config file
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlBadgeConfig {
    style: Option<Spanned<String>>,
    size: Option<Spanned<String>>,
    position: Option<Spanned<String>>,
    animated: Option<bool>,
    glowing: Option<bool>,
    #[serde(alias = "showIcon")]
    show_icon: Option<bool>,
    #[serde(alias = "customText", alias = "text")]
    custom_text: Option<String>,
}

/// Parse a spanned enum name, keeping the span on failure
fn parse_spanned<T: FromStr<Err = BadgeError>>(
    value: Option<Spanned<String>>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|spanned| {
            let span = spanned.span();
            spanned
                .get_ref()
                .parse()
                .map_err(|error| ConfigError::Invalid { error, span })
        })
        .transpose()
}

impl PartialBadgeConfig {
    /// Load a partial config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_str(&content)
    }

    /// Load a partial config from a TOML string
    ///
    /// Enum fields are checked here; an unknown name is reported with the
    /// span of the offending value.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlBadgeConfig = toml::from_str(content)?;

        Ok(PartialBadgeConfig {
            style: parse_spanned(parsed.style)?,
            size: parse_spanned(parsed.size)?,
            position: parse_spanned(parsed.position)?,
            animated: parsed.animated,
            glowing: parsed.glowing,
            show_icon: parsed.show_icon,
            custom_text: parsed.custom_text,
        })
    }

    /// Fill every missing field from `base`
    pub fn complete(self, base: &BadgeConfig) -> BadgeConfig {
        let custom_text = match self.custom_text {
            Some(text) if text.is_empty() => None,
            Some(text) => Some(text),
            None => base.custom_text.clone(),
        };

        BadgeConfig {
            style: self.style.unwrap_or(base.style),
            size: self.size.unwrap_or(base.size),
            position: self.position.unwrap_or(base.position),
            animated: self.animated.unwrap_or(base.animated),
            glowing: self.glowing.unwrap_or(base.glowing),
            show_icon: self.show_icon.unwrap_or(base.show_icon),
            custom_text,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&BadgeConfig> for PartialBadgeConfig {
    /// Every field set, so completing it reproduces `config` exactly
    fn from(config: &BadgeConfig) -> Self {
        Self {
            style: Some(config.style),
            size: Some(config.size),
            position: Some(config.position),
            animated: Some(config.animated),
            glowing: Some(config.glowing),
            show_icon: Some(config.show_icon),
            custom_text: Some(config.custom_text.clone().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BadgeConfig::default();
        assert_eq!(config.style, BadgeStyle::Standard);
        assert_eq!(config.size, BadgeSize::Md);
        assert_eq!(config.position, BadgePosition::TopRight);
        assert!(config.animated);
        assert!(config.glowing);
        assert!(config.show_icon);
        assert_eq!(config.custom_text, None);
    }

    #[test]
    fn test_enum_names_round_trip() {
        for style in BadgeStyle::ALL {
            assert_eq!(style.as_str().parse::<BadgeStyle>(), Ok(style));
        }
        for size in BadgeSize::ALL {
            assert_eq!(size.as_str().parse::<BadgeSize>(), Ok(size));
        }
        for position in BadgePosition::ALL {
            assert_eq!(position.as_str().parse::<BadgePosition>(), Ok(position));
        }
    }

    #[test]
    fn test_out_of_enum_value_rejected() {
        let err = "hexagon".parse::<BadgeStyle>().unwrap_err();
        assert!(matches!(
            err,
            BadgeError::InvalidEnumValue { field: "style", .. }
        ));
        assert!("Top-Left".parse::<BadgePosition>().is_err());
        assert!("xl".parse::<BadgeSize>().is_err());
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(BadgeConfig::new().label(), "MADE IN USA");
        assert_eq!(
            BadgeConfig::new().with_custom_text("Built Local").label(),
            "Built Local"
        );
        assert_eq!(BadgeConfig::new().with_custom_text("").label(), "MADE IN USA");
    }

    #[test]
    fn test_complete_fills_missing_fields() {
        let partial = PartialBadgeConfig {
            style: Some(BadgeStyle::Flag),
            glowing: Some(false),
            ..Default::default()
        };
        let config = partial.complete(&BadgeConfig::default());
        assert_eq!(config.style, BadgeStyle::Flag);
        assert!(!config.glowing);
        assert_eq!(config.size, BadgeSize::Md);
        assert_eq!(config.position, BadgePosition::TopRight);
    }

    #[test]
    fn test_complete_empty_text_clears_label() {
        let base = BadgeConfig::new().with_custom_text("Built Local");
        let keep = PartialBadgeConfig::default().complete(&base);
        assert_eq!(keep.label(), "Built Local");

        let clear = PartialBadgeConfig {
            custom_text: Some(String::new()),
            ..Default::default()
        }
        .complete(&base);
        assert_eq!(clear.custom_text, None);
    }

    #[test]
    fn test_full_partial_reproduces_config() {
        let config = BadgeConfig::new()
            .with_style(BadgeStyle::Ribbon)
            .with_position(BadgePosition::Center)
            .with_icon(false);
        let base = BadgeConfig::new().with_custom_text("Other");
        assert_eq!(PartialBadgeConfig::from(&config).complete(&base), config);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
style = "flag"
size = "lg"
position = "center"
animated = false
showIcon = false
customText = "Built Local"
"#;
        let partial = PartialBadgeConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(partial.style, Some(BadgeStyle::Flag));
        assert_eq!(partial.size, Some(BadgeSize::Lg));
        assert_eq!(partial.position, Some(BadgePosition::Center));
        assert_eq!(partial.animated, Some(false));
        assert_eq!(partial.glowing, None);
        assert_eq!(partial.show_icon, Some(false));
        assert_eq!(partial.custom_text.as_deref(), Some("Built Local"));
    }

    #[test]
    fn test_parse_toml_invalid_enum_has_span() {
        let toml_str = "style = \"hexagon\"\n";
        let err = PartialBadgeConfig::from_str(toml_str).unwrap_err();
        match err {
            ConfigError::Invalid { error, span } => {
                assert!(matches!(error, BadgeError::InvalidEnumValue { .. }));
                assert!(toml_str[span].contains("hexagon"));
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_toml_unknown_field() {
        let result = PartialBadgeConfig::from_str("colour = \"red\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = PartialBadgeConfig::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
