//! Error types for badge configuration and config files

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised where user input enters the configurator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadgeError {
    /// A style, size or position value outside its closed set, or an empty
    /// selector
    #[error("invalid {field} '{value}' (expected {expected})")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// Edit names a field the badge does not have
    #[error("unknown badge field '{field}'")]
    UnknownField { field: String },

    /// Boolean field given something other than true/false
    #[error("invalid value '{value}' for {field} (expected true or false)")]
    InvalidFlag { field: String, value: String },

    /// Edit is not of the form key=value
    #[error("malformed edit '{input}' (expected key=value)")]
    MalformedEdit { input: String },
}

impl BadgeError {
    /// Create an invalid enum value error listing the accepted names
    pub fn invalid_enum(field: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
            expected: format!("one of: {}", expected.join(", ")),
        }
    }

    /// Create the error for a selector that is empty or only whitespace
    pub fn empty_selector(value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            field: "selector",
            value: value.into(),
            expected: "a non-empty CSS selector".to_string(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create an invalid boolean flag error
    pub fn invalid_flag(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFlag {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Errors that can occur when loading or saving badge config files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{error}")]
    Invalid { error: BadgeError, span: Span },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Parse(e) => e.span(),
            Self::Invalid { span, .. } => Some(span.clone()),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Falls back to the plain message when the error carries no span.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let message = match self {
            Self::Parse(e) => e.message().to_string(),
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_enum_display() {
        let err = BadgeError::invalid_enum("style", "hexagon", &["standard", "round"]);
        assert_eq!(
            err.to_string(),
            "invalid style 'hexagon' (expected one of: standard, round)"
        );
    }

    #[test]
    fn test_empty_selector_display() {
        let err = BadgeError::empty_selector("  ");
        assert!(matches!(
            err,
            BadgeError::InvalidEnumValue {
                field: "selector",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid selector '  ' (expected a non-empty CSS selector)"
        );
    }

    #[test]
    fn test_invalid_flag_display() {
        let err = BadgeError::invalid_flag("animated", "yes");
        assert!(err.to_string().contains("expected true or false"));
    }

    #[test]
    fn test_config_error_span() {
        let err = ConfigError::Invalid {
            error: BadgeError::invalid_enum("size", "xl", &["sm", "md", "lg"]),
            span: 7..11,
        };
        assert_eq!(err.span(), Some(7..11));
        assert!(err.to_string().contains("invalid size 'xl'"));
    }

    #[test]
    fn test_format_points_at_source() {
        let source = "size = \"xl\"\n";
        let err = ConfigError::Invalid {
            error: BadgeError::invalid_enum("size", "xl", &["sm", "md", "lg"]),
            span: 7..11,
        };
        let report = err.format(source, "badge.toml");
        assert!(report.contains("badge.toml"));
        assert!(report.contains("invalid size 'xl'"));
    }

    #[test]
    fn test_format_without_span_is_plain_message() {
        let err = ConfigError::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.format("", "missing.toml"), err.to_string());
    }
}
