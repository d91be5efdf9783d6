//! React component snippet

use crate::config::BadgeConfig;
use crate::resolver::resolve_metrics;

use super::css::generate_css_block_with_config;
use super::escape::js_string;
use super::{flag_icon, IconMarkup, SnippetConfig, BADGE_CLASS};

/// Generate the React snippet with default snippet settings
pub fn generate_react_snippet(config: &BadgeConfig) -> String {
    generate_react_snippet_with_config(config, &SnippetConfig::default())
}

/// Generate a badge component, an example product card and the CSS to pair
/// with them
///
/// The label is rendered as a JSX string expression so no user text is
/// parsed as markup.
pub fn generate_react_snippet_with_config(config: &BadgeConfig, snippet: &SnippetConfig) -> String {
    let icon = if config.show_icon {
        format!(
            "      {}\n",
            flag_icon(resolve_metrics(config.size).icon_px, IconMarkup::Jsx)
        )
    } else {
        String::new()
    };

    // The stylesheet sits inside a block comment; its own header comment
    // would end that comment early.
    let css = generate_css_block_with_config(config, &snippet.clone().with_comments(false));

    format!(
        r#"import React from 'react';

// Made in USA Badge Component
const MadeInUSABadge = () => {{
  return (
    <div className="{class}">
{icon}      <span>{{{label}}}</span>
    </div>
  );
}};

// Example product card with the badge
const ProductCard = ({{ product }}) => {{
  return (
    <div className="product-card">
      <div className="relative">
        <img src={{product.image}} alt={{product.name}} />
        <MadeInUSABadge />
      </div>
      <h3>{{product.name}}</h3>
      <p>{{product.price}}</p>
    </div>
  );
}};

// Add this CSS to your stylesheet
/*
{css}*/

export default ProductCard;
"#,
        class = BADGE_CLASS,
        icon = icon,
        label = js_string(config.label()),
        css = css,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BadgePosition;

    #[test]
    fn test_react_snippet_structure() {
        let react = generate_react_snippet(&BadgeConfig::new());
        assert!(react.starts_with("import React from 'react';"));
        assert!(react.contains(r#"<div className="made-in-usa-badge">"#));
        assert!(react.contains(r#"<span>{"MADE IN USA"}</span>"#));
        assert!(react.contains("strokeWidth=\"2\""));
        assert!(react.contains("export default ProductCard;"));
    }

    #[test]
    fn test_react_snippet_embeds_css_once_commented() {
        let config = BadgeConfig::new().with_position(BadgePosition::Center);
        let react = generate_react_snippet(&config);
        assert_eq!(react.matches("/*").count(), 1);
        assert_eq!(react.matches("*/").count(), 1);
        assert!(react.contains("transform: translate(-50%, -50%) scale(1.05);"));
    }

    #[test]
    fn test_react_label_is_string_expression() {
        let config = BadgeConfig::new().with_custom_text("{evil}</span>");
        let react = generate_react_snippet(&config);
        assert!(react.contains(r#"<span>{"{evil}\u003c/span\u003e"}</span>"#));
    }

    #[test]
    fn test_react_without_icon() {
        let react = generate_react_snippet(&BadgeConfig::new().with_icon(false));
        assert!(!react.contains("<svg"));
    }
}
