//! Self-contained HTML badge with inline styles

use crate::config::BadgeConfig;
use crate::resolver::resolve_style_descriptor;

use super::css::{inline_declarations, CssBuilder};
use super::escape::escape_html;
use super::{flag_icon, IconMarkup, SnippetConfig, BADGE_CLASS};

/// Generate the HTML block for a badge with default snippet settings
pub fn generate_html_block(config: &BadgeConfig) -> String {
    generate_html_block_with_config(config, &SnippetConfig::default())
}

/// Generate a badge element that needs no external stylesheet
///
/// The `style` attribute carries the same declarations as the CSS block,
/// with the flag stripes inlined. The glow keyframes ship in a `<style>`
/// element next to the badge. Hover has no inline form, so only the resting
/// state is reproduced.
pub fn generate_html_block_with_config(config: &BadgeConfig, snippet: &SnippetConfig) -> String {
    let desc = resolve_style_descriptor(config);

    let mut declarations = desc.declarations();
    if let Some(image) = desc.skin.background.image() {
        declarations.push(("background-image", image));
    }

    let mut html = String::new();
    if snippet.comments {
        html.push_str("<!-- Made in USA Badge -->\n");
    }
    html.push_str(&format!(
        "<div class=\"{}\" style=\"{}\">\n",
        BADGE_CLASS,
        inline_declarations(&declarations)
    ));
    if desc.show_icon {
        html.push_str("  ");
        html.push_str(&flag_icon(desc.metrics.icon_px, IconMarkup::Html));
        html.push('\n');
    }
    html.push_str(&format!("  <span>{}</span>\n", escape_html(&desc.label)));
    html.push_str("</div>\n");

    if let Some(glow) = &desc.glow {
        let mut keyframes = CssBuilder::new(snippet);
        keyframes.add_glow_keyframes(glow);
        html.push_str("<style>\n");
        html.push_str(&keyframes.build());
        html.push_str("</style>\n");
    }
    html
}
