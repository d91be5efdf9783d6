//! Configurator session: one merchant editing one badge
//!
//! A session starts from a snapshot of the defaults store. Each edit replaces
//! the current config with a new value; nothing shared is mutated until the
//! session is explicitly saved as the new default.

use std::str::FromStr;

use crate::config::{BadgeConfig, BadgePosition, BadgeSize, BadgeStyle, PartialBadgeConfig};
use crate::defaults::DefaultsStore;
use crate::error::BadgeError;
use crate::resolver::{resolve_style_descriptor, StyleDescriptor};

/// A single-field change to a badge config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    Style(BadgeStyle),
    Size(BadgeSize),
    Position(BadgePosition),
    Animated(bool),
    Glowing(bool),
    ShowIcon(bool),
    /// Empty text restores the default label
    CustomText(String),
}

fn parse_flag(field: &str, value: &str) -> Result<bool, BadgeError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(BadgeError::invalid_flag(field, other)),
    }
}

impl FromStr for ConfigEdit {
    type Err = BadgeError;

    /// Parse `key=value`, e.g. `style=flag` or `text=Built Local`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once('=').ok_or_else(|| BadgeError::MalformedEdit {
            input: s.to_string(),
        })?;
        let key = key.trim();

        match key {
            "style" => Ok(ConfigEdit::Style(value.trim().parse()?)),
            "size" => Ok(ConfigEdit::Size(value.trim().parse()?)),
            "position" => Ok(ConfigEdit::Position(value.trim().parse()?)),
            "animated" => Ok(ConfigEdit::Animated(parse_flag(key, value.trim())?)),
            "glowing" => Ok(ConfigEdit::Glowing(parse_flag(key, value.trim())?)),
            "show-icon" | "show_icon" | "showIcon" => {
                Ok(ConfigEdit::ShowIcon(parse_flag(key, value.trim())?))
            }
            "text" | "custom-text" | "custom_text" | "customText" => {
                Ok(ConfigEdit::CustomText(value.to_string()))
            }
            other => Err(BadgeError::unknown_field(other)),
        }
    }
}

impl BadgeConfig {
    /// A copy of this config with one field changed
    pub fn edited(&self, edit: ConfigEdit) -> BadgeConfig {
        let config = self.clone();
        match edit {
            ConfigEdit::Style(style) => config.with_style(style),
            ConfigEdit::Size(size) => config.with_size(size),
            ConfigEdit::Position(position) => config.with_position(position),
            ConfigEdit::Animated(animated) => config.with_animated(animated),
            ConfigEdit::Glowing(glowing) => config.with_glowing(glowing),
            ConfigEdit::ShowIcon(show_icon) => config.with_icon(show_icon),
            ConfigEdit::CustomText(text) => config.with_custom_text(text),
        }
    }
}

/// State of one configurator session
#[derive(Debug, Clone)]
pub struct ConfiguratorSession {
    config: BadgeConfig,
}

impl ConfiguratorSession {
    /// Start a session seeded from the current defaults
    pub fn start(defaults: &DefaultsStore) -> Self {
        Self {
            config: defaults.snapshot(),
        }
    }

    /// The config as it stands after all edits so far
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Apply one edit
    pub fn apply(&mut self, edit: ConfigEdit) -> &BadgeConfig {
        log::debug!("session edit: {:?}", edit);
        self.config = self.config.edited(edit);
        &self.config
    }

    /// Apply a batch of edits in order
    pub fn apply_all(&mut self, edits: impl IntoIterator<Item = ConfigEdit>) -> &BadgeConfig {
        for edit in edits {
            self.apply(edit);
        }
        &self.config
    }

    /// Overlay the fields a partial config sets, e.g. from a config file
    pub fn merge(&mut self, partial: PartialBadgeConfig) -> &BadgeConfig {
        self.config = partial.complete(&self.config);
        &self.config
    }

    /// Resolve the current config for preview
    pub fn descriptor(&self) -> StyleDescriptor {
        resolve_style_descriptor(&self.config)
    }

    /// Store the current config as the default for future sessions
    pub fn save_as_default(&self, defaults: &mut DefaultsStore) {
        defaults.update_defaults(PartialBadgeConfig::from(&self.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edits() {
        assert_eq!(
            "style=flag".parse::<ConfigEdit>(),
            Ok(ConfigEdit::Style(BadgeStyle::Flag))
        );
        assert_eq!(
            "position = bottom-left".parse::<ConfigEdit>(),
            Ok(ConfigEdit::Position(BadgePosition::BottomLeft))
        );
        assert_eq!(
            "showIcon=false".parse::<ConfigEdit>(),
            Ok(ConfigEdit::ShowIcon(false))
        );
        assert_eq!(
            "text=Built Local".parse::<ConfigEdit>(),
            Ok(ConfigEdit::CustomText("Built Local".to_string()))
        );
        assert_eq!(
            "text=".parse::<ConfigEdit>(),
            Ok(ConfigEdit::CustomText(String::new()))
        );
    }

    #[test]
    fn test_parse_edit_errors() {
        assert!(matches!(
            "style=hexagon".parse::<ConfigEdit>(),
            Err(BadgeError::InvalidEnumValue { field: "style", .. })
        ));
        assert!(matches!(
            "animated=yes".parse::<ConfigEdit>(),
            Err(BadgeError::InvalidFlag { .. })
        ));
        assert!(matches!(
            "colour=red".parse::<ConfigEdit>(),
            Err(BadgeError::UnknownField { .. })
        ));
        assert!(matches!(
            "style".parse::<ConfigEdit>(),
            Err(BadgeError::MalformedEdit { .. })
        ));
    }

    #[test]
    fn test_session_starts_from_defaults() {
        let defaults = DefaultsStore::with_defaults(BadgeConfig::new().with_size(BadgeSize::Lg));
        let session = ConfiguratorSession::start(&defaults);
        assert_eq!(session.config().size, BadgeSize::Lg);
    }

    #[test]
    fn test_edits_do_not_touch_defaults() {
        let defaults = DefaultsStore::new();
        let mut session = ConfiguratorSession::start(&defaults);
        session.apply_all([
            ConfigEdit::Style(BadgeStyle::Ribbon),
            ConfigEdit::Glowing(false),
            ConfigEdit::CustomText("Built Local".to_string()),
        ]);

        assert_eq!(session.config().style, BadgeStyle::Ribbon);
        assert_eq!(session.config().label(), "Built Local");
        assert_eq!(defaults.snapshot(), BadgeConfig::default());
    }

    #[test]
    fn test_save_as_default_seeds_next_session() {
        let mut defaults = DefaultsStore::new();
        let mut first = ConfiguratorSession::start(&defaults);
        first.apply(ConfigEdit::Position(BadgePosition::Center));
        first.apply(ConfigEdit::CustomText("Built Local".to_string()));
        first.save_as_default(&mut defaults);

        let mut second = ConfiguratorSession::start(&defaults);
        assert_eq!(second.config(), first.config());

        second.apply(ConfigEdit::CustomText(String::new()));
        second.save_as_default(&mut defaults);
        assert_eq!(defaults.snapshot().custom_text, None);
    }

    #[test]
    fn test_merge_partial() {
        let mut session = ConfiguratorSession::start(&DefaultsStore::new());
        session.merge(PartialBadgeConfig {
            style: Some(BadgeStyle::Flag),
            ..Default::default()
        });
        assert_eq!(session.config().style, BadgeStyle::Flag);
        assert!(session.descriptor().skin.background.image().is_some());
    }
}
