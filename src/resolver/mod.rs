//! Deterministic mapping from a badge config to its presentation
//!
//! Every lookup is an exhaustive match over a closed enumeration, so each
//! style, size and position variant is guaranteed a rule at compile time.
//! Resolution has no state and no failure mode: out-of-set values are turned
//! away when the config is parsed, before they can reach this module.

pub mod types;

pub use types::{
    Background, CornerRounding, Declaration, GlowEffect, GlowStage, HoverEffect, Placement,
    SizeMetrics, Skin, StyleDescriptor,
};

use crate::config::{BadgeConfig, BadgePosition, BadgeSize, BadgeStyle};

pub const USA_BLUE: &str = "#002868";
pub const USA_RED: &str = "#BF0A30";
pub const USA_WHITE: &str = "#ffffff";

/// Diagonal red/white stripes of the flag style
pub const FLAG_STRIPES: &str =
    "repeating-linear-gradient(45deg, #BF0A30, #BF0A30 10px, #FFFFFF 10px, #FFFFFF 20px)";

/// Shadow of a badge without the glow effect
pub const BASE_SHADOW: &str = "0 2px 5px rgba(0, 0, 0, 0.2)";

/// Offset of edge-anchored badges from the container edges
const EDGE_OFFSET: &str = "10px";

/// Re-centering translation of the centered position
pub const CENTER_TRANSLATE: &str = "translate(-50%, -50%)";

const HOVER_SCALE: &str = "scale(1.05)";
const HOVER_SCALE_CENTERED: &str = "translate(-50%, -50%) scale(1.05)";

const GLOW: GlowEffect = GlowEffect {
    shadow: "0 0 15px rgba(191, 10, 48, 0.5)",
    keyframes: "badge-glow",
    animation: "badge-glow 2s infinite alternate",
    stages: [
        GlowStage {
            at: "from",
            shadow: "0 0 10px rgba(191, 10, 48, 0.5)",
        },
        GlowStage {
            at: "to",
            shadow: "0 0 20px rgba(191, 10, 48, 0.8)",
        },
    ],
};

/// Color, border and corner treatment of a style
pub fn resolve_skin(style: BadgeStyle) -> Skin {
    match style {
        BadgeStyle::Standard => Skin {
            background: Background::Solid { color: USA_BLUE },
            text_color: USA_WHITE,
            border: Some("2px solid white"),
            corners: CornerRounding::Uniform,
        },
        BadgeStyle::Round => Skin {
            background: Background::Solid { color: USA_BLUE },
            text_color: USA_WHITE,
            border: Some("2px solid white"),
            corners: CornerRounding::Pill,
        },
        BadgeStyle::Ribbon => Skin {
            background: Background::Solid { color: USA_RED },
            text_color: USA_WHITE,
            border: None,
            corners: CornerRounding::TrailingEdge,
        },
        BadgeStyle::Flag => Skin {
            background: Background::Striped {
                color: "transparent",
                image: FLAG_STRIPES,
            },
            text_color: USA_BLUE,
            border: None,
            corners: CornerRounding::Uniform,
        },
    }
}

/// Padding, font size and icon size of a size
pub fn resolve_metrics(size: BadgeSize) -> SizeMetrics {
    match size {
        BadgeSize::Sm => SizeMetrics {
            padding: "4px 8px",
            font_size: "12px",
            icon_px: 12,
        },
        BadgeSize::Md => SizeMetrics {
            padding: "6px 12px",
            font_size: "14px",
            icon_px: 16,
        },
        BadgeSize::Lg => SizeMetrics {
            padding: "8px 16px",
            font_size: "16px",
            icon_px: 20,
        },
    }
}

/// Absolute-position offsets of a position
pub fn resolve_placement(position: BadgePosition) -> Placement {
    match position {
        BadgePosition::TopLeft => Placement {
            top: Some(EDGE_OFFSET),
            left: Some(EDGE_OFFSET),
            ..Default::default()
        },
        BadgePosition::TopRight => Placement {
            top: Some(EDGE_OFFSET),
            right: Some(EDGE_OFFSET),
            ..Default::default()
        },
        BadgePosition::BottomLeft => Placement {
            bottom: Some(EDGE_OFFSET),
            left: Some(EDGE_OFFSET),
            ..Default::default()
        },
        BadgePosition::BottomRight => Placement {
            bottom: Some(EDGE_OFFSET),
            right: Some(EDGE_OFFSET),
            ..Default::default()
        },
        BadgePosition::Center => Placement {
            top: Some("50%"),
            left: Some("50%"),
            transform: Some(CENTER_TRANSLATE),
            ..Default::default()
        },
    }
}

/// Hover effect for a position
///
/// The centered badge keeps its re-centering translation while scaled;
/// replacing it with a bare scale would shift the badge on hover.
pub fn resolve_hover(position: BadgePosition) -> HoverEffect {
    let transform = match position {
        BadgePosition::Center => HOVER_SCALE_CENTERED,
        BadgePosition::TopLeft
        | BadgePosition::TopRight
        | BadgePosition::BottomLeft
        | BadgePosition::BottomRight => HOVER_SCALE,
    };
    HoverEffect {
        transition: "transform 0.3s",
        transform,
    }
}

/// The pulsing glow
pub fn glow_effect() -> GlowEffect {
    GLOW
}

/// Resolve a config into its style descriptor
pub fn resolve_style_descriptor(config: &BadgeConfig) -> StyleDescriptor {
    log::debug!(
        "resolving badge style={} size={} position={}",
        config.style,
        config.size,
        config.position
    );

    StyleDescriptor {
        skin: resolve_skin(config.style),
        metrics: resolve_metrics(config.size),
        placement: resolve_placement(config.position),
        hover: config.animated.then(|| resolve_hover(config.position)),
        glow: config.glowing.then(glow_effect),
        show_icon: config.show_icon,
        label: resolve_label(config),
    }
}

/// The badge text: custom text when non-empty, otherwise `MADE IN USA`
pub fn resolve_label(config: &BadgeConfig) -> String {
    config.label().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_deterministic() {
        for style in BadgeStyle::ALL {
            for position in BadgePosition::ALL {
                let config = BadgeConfig::new().with_style(style).with_position(position);
                assert_eq!(
                    resolve_style_descriptor(&config),
                    resolve_style_descriptor(&config.clone())
                );
            }
        }
    }

    #[test]
    fn test_resolve_label() {
        let mut config = BadgeConfig::new();
        config.custom_text = Some(String::new());
        assert_eq!(resolve_label(&config), "MADE IN USA");

        config.custom_text = Some("Built Local".to_string());
        assert_eq!(resolve_label(&config), "Built Local");

        config.custom_text = None;
        assert_eq!(resolve_label(&config), "MADE IN USA");
    }

    #[test]
    fn test_ribbon_is_red_and_asymmetric() {
        let ribbon = resolve_skin(BadgeStyle::Ribbon);
        assert_eq!(ribbon.background, Background::Solid { color: USA_RED });
        assert_eq!(ribbon.corners.radius(), "0 4px 4px 0");

        for style in [BadgeStyle::Standard, BadgeStyle::Round] {
            let skin = resolve_skin(style);
            assert_eq!(skin.background, Background::Solid { color: USA_BLUE });
            assert_ne!(skin.background, ribbon.background);
        }
    }

    #[test]
    fn test_corner_policy() {
        assert_eq!(resolve_skin(BadgeStyle::Round).corners, CornerRounding::Pill);
        assert_eq!(
            resolve_skin(BadgeStyle::Ribbon).corners,
            CornerRounding::TrailingEdge
        );
        assert_eq!(
            resolve_skin(BadgeStyle::Standard).corners,
            CornerRounding::Uniform
        );
        assert_eq!(resolve_skin(BadgeStyle::Flag).corners, CornerRounding::Uniform);
    }

    #[test]
    fn test_flag_is_striped() {
        let flag = resolve_skin(BadgeStyle::Flag);
        assert_eq!(flag.background.image(), Some(FLAG_STRIPES));
        assert_eq!(flag.text_color, USA_BLUE);
        for style in [BadgeStyle::Standard, BadgeStyle::Round, BadgeStyle::Ribbon] {
            assert_eq!(resolve_skin(style).background.image(), None);
        }
    }

    #[test]
    fn test_center_placement_recenters() {
        let center = resolve_placement(BadgePosition::Center);
        assert_eq!(center.top, Some("50%"));
        assert_eq!(center.left, Some("50%"));
        assert_eq!(center.transform, Some("translate(-50%, -50%)"));
        assert_eq!(center.right, None);
        assert_eq!(center.bottom, None);
    }

    #[test]
    fn test_center_hover_composes_translate() {
        assert_eq!(
            resolve_hover(BadgePosition::Center).transform,
            "translate(-50%, -50%) scale(1.05)"
        );
        assert_eq!(resolve_hover(BadgePosition::TopLeft).transform, "scale(1.05)");
    }

    #[test]
    fn test_effects_follow_flags() {
        let still = BadgeConfig::new().with_animated(false).with_glowing(false);
        let desc = resolve_style_descriptor(&still);
        assert!(desc.hover.is_none());
        assert!(desc.glow.is_none());
        assert_eq!(desc.box_shadow(), BASE_SHADOW);

        let desc = resolve_style_descriptor(&BadgeConfig::new());
        assert!(desc.hover.is_some());
        assert_eq!(desc.glow.map(|g| g.stages.len()), Some(2));
        assert_eq!(desc.box_shadow(), "0 0 15px rgba(191, 10, 48, 0.5)");
    }

    #[test]
    fn test_standard_top_right_scenario() {
        let config = BadgeConfig {
            style: BadgeStyle::Standard,
            size: BadgeSize::Md,
            position: BadgePosition::TopRight,
            animated: true,
            glowing: true,
            show_icon: true,
            custom_text: None,
        };
        let desc = resolve_style_descriptor(&config);

        assert_eq!(desc.skin.background.color(), USA_BLUE);
        assert_eq!(desc.skin.text_color, USA_WHITE);
        assert_eq!(desc.metrics.padding, "6px 12px");
        assert_eq!(desc.placement.to_inline(), "top: 10px; right: 10px;");
        assert_eq!(desc.hover.map(|h| h.transform), Some("scale(1.05)"));
        assert!(desc.glow.is_some());
        assert!(desc.show_icon);
        assert_eq!(desc.label, "MADE IN USA");
    }

    #[test]
    fn test_declarations_cover_descriptor() {
        let config = BadgeConfig::new()
            .with_style(BadgeStyle::Flag)
            .with_glowing(false);
        let decls = resolve_style_descriptor(&config).declarations();
        let get = |property: &str| {
            decls
                .iter()
                .find(|(p, _)| *p == property)
                .map(|(_, v)| *v)
        };
        assert_eq!(get("position"), Some("absolute"));
        assert_eq!(get("background-color"), Some("transparent"));
        assert_eq!(get("color"), Some(USA_BLUE));
        assert_eq!(get("border"), None);
        assert_eq!(get("animation"), None);
        assert_eq!(get("box-shadow"), Some(BASE_SHADOW));
        assert_eq!(get("background-image"), None);
    }
}
