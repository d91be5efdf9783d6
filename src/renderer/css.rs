//! CSS generation from style descriptors

use crate::config::BadgeConfig;
use crate::resolver::{resolve_style_descriptor, Declaration, GlowEffect, StyleDescriptor};

use super::{SnippetConfig, BADGE_CLASS};

/// Build a stylesheet rule by rule
pub struct CssBuilder {
    pretty_print: bool,
    comments: bool,
    blocks: Vec<String>,
}

impl CssBuilder {
    /// Create a new CSS builder
    pub fn new(config: &SnippetConfig) -> Self {
        Self {
            pretty_print: config.pretty_print,
            comments: config.comments,
            blocks: vec![],
        }
    }

    /// Add a comment block; dropped when comments are disabled
    pub fn add_comment(&mut self, text: &str) {
        if self.comments {
            self.blocks.push(format!("/* {} */", text));
        }
    }

    /// Add a rule with the given declarations
    pub fn add_rule(&mut self, selector: &str, declarations: &[Declaration]) {
        let rule = if self.pretty_print {
            let body = declarations
                .iter()
                .map(|(property, value)| format!("  {}: {};\n", property, value))
                .collect::<String>();
            format!("{} {{\n{}}}", selector, body)
        } else {
            format!("{} {{ {} }}", selector, inline_declarations(declarations))
        };
        self.blocks.push(rule);
    }

    /// Add the keyframes of the glow pulse
    pub fn add_glow_keyframes(&mut self, glow: &GlowEffect) {
        let stages = glow
            .stages
            .iter()
            .map(|stage| format!("{} {{ box-shadow: {}; }}", stage.at, stage.shadow))
            .collect::<Vec<_>>();

        let block = if self.pretty_print {
            let body = stages
                .iter()
                .map(|stage| format!("  {}\n", stage))
                .collect::<String>();
            format!("@keyframes {} {{\n{}}}", glow.keyframes, body)
        } else {
            format!("@keyframes {} {{ {} }}", glow.keyframes, stages.join(" "))
        };
        self.blocks.push(block);
    }

    /// Build the final CSS string
    pub fn build(self) -> String {
        let separator = if self.pretty_print { "\n\n" } else { "\n" };
        let mut css = self.blocks.join(separator);
        css.push('\n');
        css
    }
}

/// Declarations joined on one line, as used in `style` attributes
pub fn inline_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Add the rules of one resolved badge to a builder
pub(crate) fn add_badge_rules(builder: &mut CssBuilder, desc: &StyleDescriptor) {
    let selector = format!(".{}", BADGE_CLASS);
    builder.add_rule(&selector, &desc.declarations());

    if let Some(image) = desc.skin.background.image() {
        builder.add_rule(&selector, &[("background-image", image)]);
    }

    if let Some(hover) = desc.hover {
        builder.add_rule(
            &format!("{}:hover", selector),
            &[("transform", hover.transform)],
        );
    }

    if let Some(glow) = &desc.glow {
        builder.add_glow_keyframes(glow);
    }
}

/// Generate the CSS block for a badge with default snippet settings
pub fn generate_css_block(config: &BadgeConfig) -> String {
    generate_css_block_with_config(config, &SnippetConfig::default())
}

/// Generate the CSS block for a badge
///
/// The striped background rule appears only for the flag style, the hover
/// rule only when animated and the glow keyframes only when glowing.
pub fn generate_css_block_with_config(config: &BadgeConfig, snippet: &SnippetConfig) -> String {
    let desc = resolve_style_descriptor(config);
    let mut builder = CssBuilder::new(snippet);
    builder.add_comment("Made in USA Badge CSS");
    add_badge_rules(&mut builder, &desc);
    builder.build()
}
