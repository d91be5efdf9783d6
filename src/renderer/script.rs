//! Script snippets that attach badges at runtime
//!
//! Both snippets target every element matching a CSS selector. The init
//! snippet calls the distributed runtime (`window.MadeInUSA.init`); the
//! injection script builds the badge itself and only needs the stylesheet.
//! All interpolated strings are emitted as escaped JavaScript literals.

use crate::assets::{RUNTIME_FILE, STYLESHEET_FILE};
use crate::config::BadgeConfig;
use crate::error::BadgeError;
use crate::resolver::resolve_metrics;

use super::escape::{escape_html, js_string};
use super::{flag_icon, modifier_class, IconMarkup, SnippetConfig, BADGE_CLASS};

/// Reject selectors the browser would not accept
fn check_selector(selector: &str) -> Result<&str, BadgeError> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err(BadgeError::empty_selector(selector));
    }
    Ok(trimmed)
}

/// Properties of the runtime `init` call, in contract order
fn init_properties(selector: &str, config: &BadgeConfig) -> Vec<String> {
    let mut props = vec![
        format!("selector: {}", js_string(selector)),
        format!("style: {}", js_string(config.style.as_str())),
        format!("size: {}", js_string(config.size.as_str())),
        format!("position: {}", js_string(config.position.as_str())),
        format!("animated: {}", config.animated),
        format!("glowing: {}", config.glowing),
        format!("showIcon: {}", config.show_icon),
    ];
    if let Some(text) = config.custom_text.as_deref().filter(|t| !t.is_empty()) {
        props.push(format!("customText: {}", js_string(text)));
    }
    props
}

/// Generate the init snippet with default snippet settings
pub fn generate_init_snippet(selector: &str, config: &BadgeConfig) -> Result<String, BadgeError> {
    generate_init_snippet_with_config(selector, config, &SnippetConfig::default())
}

/// Generate the `<link>`/`<script>` tags and the runtime `init` call
///
/// `customText` is included only when the config carries custom text, so the
/// runtime falls back to its own default label otherwise.
pub fn generate_init_snippet_with_config(
    selector: &str,
    config: &BadgeConfig,
    snippet: &SnippetConfig,
) -> Result<String, BadgeError> {
    let selector = check_selector(selector)?;

    let mut out = String::new();
    if snippet.comments {
        out.push_str("<!-- Made in USA Badge - Add this to your website -->\n");
    }
    out.push_str(&format!(
        "<link href=\"{}\" rel=\"stylesheet\">\n",
        escape_html(&snippet.asset_url(STYLESHEET_FILE))
    ));
    out.push_str(&format!(
        "<script src=\"{}\"></script>\n",
        escape_html(&snippet.asset_url(RUNTIME_FILE))
    ));
    out.push_str("<script>\n");
    if snippet.comments {
        out.push_str("  // Initialize the badge\n");
    }
    out.push_str("  window.MadeInUSA.init({\n    ");
    out.push_str(&init_properties(selector, config).join(",\n    "));
    out.push_str("\n  });\n</script>\n");
    Ok(out)
}

/// Generate the injection script with default snippet settings
pub fn generate_injection_script(
    selector: &str,
    config: &BadgeConfig,
) -> Result<String, BadgeError> {
    generate_injection_script_with_config(selector, config, &SnippetConfig::default())
}

/// Generate a standalone script that appends a badge to each matching element
///
/// The badge carries the modifier classes of the distributed stylesheet, so
/// that stylesheet must be present on the page.
pub fn generate_injection_script_with_config(
    selector: &str,
    config: &BadgeConfig,
    snippet: &SnippetConfig,
) -> Result<String, BadgeError> {
    let selector = check_selector(selector)?;

    let mut classes = vec![
        BADGE_CLASS.to_string(),
        modifier_class(config.style.as_str()),
        modifier_class(config.size.as_str()),
        modifier_class(config.position.as_str()),
    ];
    if config.animated {
        classes.push(modifier_class("animated"));
    }
    if config.glowing {
        classes.push(modifier_class("glowing"));
    }

    let mut out = String::new();
    if snippet.comments {
        out.push_str(&format!(
            "// Made in USA Badge - requires {}\n",
            STYLESHEET_FILE
        ));
    }
    out.push_str("(function() {\n");
    out.push_str(&format!(
        "  var targets = document.querySelectorAll({});\n",
        js_string(selector)
    ));
    out.push_str("  targets.forEach(function(target) {\n");
    out.push_str("    if (window.getComputedStyle(target).position === 'static') {\n");
    out.push_str("      target.style.position = 'relative';\n");
    out.push_str("    }\n");
    out.push_str("    var badge = document.createElement('div');\n");
    out.push_str(&format!(
        "    badge.className = {};\n",
        js_string(&classes.join(" "))
    ));
    if config.show_icon {
        let icon_px = resolve_metrics(config.size).icon_px;
        out.push_str("    var icon = document.createElement('span');\n");
        out.push_str(&format!(
            "    icon.innerHTML = {};\n",
            js_string(&flag_icon(icon_px, IconMarkup::Html))
        ));
        out.push_str("    badge.appendChild(icon);\n");
    }
    out.push_str("    var text = document.createElement('span');\n");
    out.push_str(&format!(
        "    text.textContent = {};\n",
        js_string(config.label())
    ));
    out.push_str("    badge.appendChild(text);\n");
    out.push_str("    target.appendChild(badge);\n");
    out.push_str("  });\n");
    out.push_str("})();\n");
    Ok(out)
}
