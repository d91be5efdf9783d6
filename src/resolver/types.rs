//! Resolved, renderer-agnostic badge presentation

use serde::Serialize;

/// A CSS declaration as (property, value)
pub type Declaration = (&'static str, &'static str);

/// Background treatment of the badge body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Background {
    /// Plain fill color
    Solid { color: &'static str },
    /// Transparent body with a diagonal stripe image on top
    Striped {
        color: &'static str,
        image: &'static str,
    },
}

impl Background {
    /// Value for `background-color`
    pub fn color(&self) -> &'static str {
        match self {
            Background::Solid { color } | Background::Striped { color, .. } => *color,
        }
    }

    /// Value for `background-image`, striped backgrounds only
    pub fn image(&self) -> Option<&'static str> {
        match self {
            Background::Solid { .. } => None,
            Background::Striped { image, .. } => Some(*image),
        }
    }
}

/// Corner-rounding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerRounding {
    /// Small radius on all four corners
    Uniform,
    /// Fully rounded ends
    Pill,
    /// Only the right-hand corners rounded, flat edge against the container
    TrailingEdge,
}

impl CornerRounding {
    /// Value for `border-radius`
    pub fn radius(self) -> &'static str {
        match self {
            CornerRounding::Uniform => "4px",
            CornerRounding::Pill => "9999px",
            CornerRounding::TrailingEdge => "0 4px 4px 0",
        }
    }
}

/// Color, border and shape selected by the badge style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skin {
    pub background: Background,
    pub text_color: &'static str,
    pub border: Option<&'static str>,
    pub corners: CornerRounding,
}

impl Skin {
    /// Declarations for the style, excluding `background-image`
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut decls = vec![
            ("background-color", self.background.color()),
            ("color", self.text_color),
        ];
        if let Some(border) = self.border {
            decls.push(("border", border));
        }
        decls.push(("border-radius", self.corners.radius()));
        decls
    }
}

/// Padding and type size selected by the badge size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeMetrics {
    pub padding: &'static str,
    pub font_size: &'static str,
    /// Edge length of the flag glyph in pixels
    pub icon_px: u32,
}

impl SizeMetrics {
    pub fn declarations(&self) -> Vec<Declaration> {
        vec![("font-size", self.font_size), ("padding", self.padding)]
    }
}

/// Absolute-position offsets
///
/// Edge positions set two offsets. The centered position sets `top` and
/// `left` to the midpoint and translates the element back by half its size
/// on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Placement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<&'static str>,
}

impl Placement {
    /// Offsets in `top, bottom, left, right, transform` order
    pub fn declarations(&self) -> Vec<Declaration> {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
            ("transform", self.transform),
        ]
        .into_iter()
        .filter_map(|(property, value)| value.map(|v| (property, v)))
        .collect()
    }

    /// Offsets as a single inline declaration list, e.g. `top: 10px; left: 10px;`
    pub fn to_inline(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Hover-scale effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoverEffect {
    pub transition: &'static str,
    /// Transform applied on hover, composed with any placement transform
    pub transform: &'static str,
}

/// One stage of the glow pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlowStage {
    /// Keyframe selector (`from` / `to`)
    pub at: &'static str,
    pub shadow: &'static str,
}

/// Pulsing shadow effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlowEffect {
    /// Resting shadow, used where keyframes are unavailable
    pub shadow: &'static str,
    pub keyframes: &'static str,
    pub animation: &'static str,
    pub stages: [GlowStage; 2],
}

/// Everything needed to draw a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub skin: Skin,
    pub metrics: SizeMetrics,
    pub placement: Placement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<GlowEffect>,
    pub show_icon: bool,
    pub label: String,
}

impl StyleDescriptor {
    /// The shadow the badge rests with
    pub fn box_shadow(&self) -> &'static str {
        self.glow
            .map(|glow| glow.shadow)
            .unwrap_or(super::BASE_SHADOW)
    }

    /// Declarations of the badge rule, excluding `background-image`
    ///
    /// Shared by the stylesheet rule and the inline `style` attribute so both
    /// render the same badge.
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut decls = vec![("position", "absolute")];
        decls.extend(self.placement.declarations());
        decls.extend(self.skin.declarations());
        decls.extend(self.metrics.declarations());
        decls.extend([
            ("font-weight", "bold"),
            ("z-index", "10"),
            ("display", "flex"),
            ("align-items", "center"),
            ("gap", "4px"),
        ]);
        if let Some(hover) = self.hover {
            decls.push(("transition", hover.transition));
        }
        decls.push(("box-shadow", self.box_shadow()));
        if let Some(glow) = self.glow {
            decls.push(("animation", glow.animation));
        }
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_declaration_order() {
        let placement = Placement {
            top: Some("50%"),
            left: Some("50%"),
            transform: Some("translate(-50%, -50%)"),
            ..Default::default()
        };
        assert_eq!(
            placement.to_inline(),
            "top: 50%; left: 50%; transform: translate(-50%, -50%);"
        );
    }

    #[test]
    fn test_background_accessors() {
        let solid = Background::Solid { color: "#002868" };
        assert_eq!(solid.color(), "#002868");
        assert_eq!(solid.image(), None);

        let striped = Background::Striped {
            color: "transparent",
            image: "stripes",
        };
        assert_eq!(striped.color(), "transparent");
        assert_eq!(striped.image(), Some("stripes"));
    }

    #[test]
    fn test_corner_radius() {
        assert_eq!(CornerRounding::Uniform.radius(), "4px");
        assert_eq!(CornerRounding::Pill.radius(), "9999px");
        assert_eq!(CornerRounding::TrailingEdge.radius(), "0 4px 4px 0");
    }
}
