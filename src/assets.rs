//! Distributable badge assets
//!
//! Writes the stylesheet, the runtime script and a README into an output
//! directory. Third-party sites link these files directly, so the file names,
//! class names and the `window.MadeInUSA.init` call shape are fixed.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{BadgePosition, BadgeSize, BadgeStyle, DEFAULT_LABEL};
use crate::renderer::css::CssBuilder;
use crate::renderer::escape::js_string;
use crate::renderer::{flag_icon, modifier_class, IconMarkup, SnippetConfig, BADGE_CLASS};
use crate::resolver::{
    glow_effect, resolve_hover, resolve_metrics, resolve_placement, resolve_skin, BASE_SHADOW,
};

pub const STYLESHEET_FILE: &str = "made-in-usa-badge.css";
pub const RUNTIME_FILE: &str = "made-in-usa-badge.js";
pub const README_FILE: &str = "README.md";

/// Version stamped into the asset headers
pub const ASSET_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that can occur while writing assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write asset '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Paths of the files written by [`build_assets`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub stylesheet: PathBuf,
    pub runtime: PathBuf,
    pub readme: PathBuf,
}

/// Generate the stylesheet covering every badge variant
///
/// Each style, size and position gets a `made-in-usa-badge--<name>` class
/// built from the same lookup tables the resolver uses.
pub fn generate_stylesheet(snippet: &SnippetConfig) -> String {
    let base = format!(".{}", BADGE_CLASS);
    let class = |variant: &str| format!(".{}", modifier_class(variant));

    let mut builder = CssBuilder::new(snippet);
    builder.add_comment(&format!("Made in USA Badge v{}", ASSET_VERSION));
    builder.add_rule(
        &base,
        &[
            ("position", "absolute"),
            ("z-index", "10"),
            ("font-weight", "bold"),
            ("display", "flex"),
            ("align-items", "center"),
            ("gap", "4px"),
            (
                "font-family",
                "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif",
            ),
        ],
    );

    builder.add_comment("Positions");
    for position in BadgePosition::ALL {
        builder.add_rule(
            &class(position.as_str()),
            &resolve_placement(position).declarations(),
        );
    }

    builder.add_comment("Styles");
    for style in BadgeStyle::ALL {
        let skin = resolve_skin(style);
        let mut decls = skin.declarations();
        if let Some(image) = skin.background.image() {
            decls.push(("background-image", image));
        }
        decls.push(("box-shadow", BASE_SHADOW));
        builder.add_rule(&class(style.as_str()), &decls);
    }

    builder.add_comment("Sizes");
    for size in BadgeSize::ALL {
        builder.add_rule(&class(size.as_str()), &resolve_metrics(size).declarations());
    }

    builder.add_comment("Effects");
    let animated = class("animated");
    let edge_hover = resolve_hover(BadgePosition::TopLeft);
    let center_hover = resolve_hover(BadgePosition::Center);
    builder.add_rule(&animated, &[("transition", edge_hover.transition)]);
    builder.add_rule(
        &format!("{}:hover", animated),
        &[("transform", edge_hover.transform)],
    );
    builder.add_rule(
        &format!("{}{}:hover", class(BadgePosition::Center.as_str()), animated),
        &[("transform", center_hover.transform)],
    );

    let glow = glow_effect();
    builder.add_rule(
        &class("glowing"),
        &[("box-shadow", glow.shadow), ("animation", glow.animation)],
    );
    builder.add_glow_keyframes(&glow);

    builder.build()
}

/// Generate the runtime script exposing `window.MadeInUSA.init`
///
/// The runtime accepts only the known style, size and position names and
/// throws on anything else rather than attaching a broken badge.
pub fn generate_runtime_script() -> String {
    let names = |values: Vec<&str>| {
        values
            .into_iter()
            .map(js_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut js = format!("/* Made in USA Badge v{} */\n", ASSET_VERSION);
    js.push_str("(function() {\n");
    js.push_str(&format!(
        "  var STYLES = [{}];\n",
        names(BadgeStyle::ALL.iter().map(|s| s.as_str()).collect())
    ));
    js.push_str(&format!(
        "  var SIZES = [{}];\n",
        names(BadgeSize::ALL.iter().map(|s| s.as_str()).collect())
    ));
    js.push_str(&format!(
        "  var POSITIONS = [{}];\n",
        names(BadgePosition::ALL.iter().map(|p| p.as_str()).collect())
    ));
    js.push_str(&format!(
        "  var FLAG_ICON = {};\n",
        js_string(&flag_icon(16, IconMarkup::Html))
    ));
    js.push_str(&format!("  var DEFAULT_TEXT = {};\n", js_string(DEFAULT_LABEL)));
    js.push_str(&format!("  var BADGE_CLASS = {};\n", js_string(BADGE_CLASS)));
    js.push_str(RUNTIME_BODY);
    js.push_str("})();\n");
    js
}

const RUNTIME_BODY: &str = r#"
  function pick(name, value, allowed, fallback) {
    if (value === undefined) {
      return fallback;
    }
    if (allowed.indexOf(value) === -1) {
      throw new Error('MadeInUSA: invalid ' + name + ' "' + value + '" (expected one of: ' + allowed.join(', ') + ')');
    }
    return value;
  }

  function flag(value, fallback) {
    return value === undefined ? fallback : !!value;
  }

  window.MadeInUSA = {
    init: function(config) {
      config = config || {};
      var selector = config.selector || '.product-container';
      var style = pick('style', config.style, STYLES, 'standard');
      var size = pick('size', config.size, SIZES, 'md');
      var position = pick('position', config.position, POSITIONS, 'top-right');
      var animated = flag(config.animated, true);
      var glowing = flag(config.glowing, false);
      var showIcon = flag(config.showIcon, true);
      var customText = config.customText || DEFAULT_TEXT;

      var products = document.querySelectorAll(selector);
      products.forEach(function(product) {
        if (window.getComputedStyle(product).position === 'static') {
          product.style.position = 'relative';
        }

        var badge = document.createElement('div');
        badge.className = BADGE_CLASS;
        badge.classList.add(BADGE_CLASS + '--' + style);
        badge.classList.add(BADGE_CLASS + '--' + size);
        badge.classList.add(BADGE_CLASS + '--' + position);
        if (animated) {
          badge.classList.add(BADGE_CLASS + '--animated');
        }
        if (glowing) {
          badge.classList.add(BADGE_CLASS + '--glowing');
        }

        if (showIcon) {
          var icon = document.createElement('span');
          icon.innerHTML = FLAG_ICON;
          badge.appendChild(icon);
        }

        var text = document.createElement('span');
        text.textContent = customText;
        badge.appendChild(text);

        product.appendChild(badge);
      });
    }
  };
"#;

/// Generate the README shipped next to the assets
pub fn generate_readme(snippet: &SnippetConfig) -> String {
    let quoted = |values: Vec<&str>| {
        values
            .into_iter()
            .map(|v| format!("\"{}\"", v))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"# Made in USA Badge

A simple, customizable badge to showcase products made in the USA.

## Installation

Add these lines to your HTML:

```html
<link href="{css_url}" rel="stylesheet">
<script src="{js_url}"></script>
```

## Usage

Initialize the badge with your configuration:

```html
<script>
  window.MadeInUSA.init({{
    selector: ".product-container", // CSS selector for product containers
    style: "standard",             // {styles}
    size: "md",                    // {sizes}
    position: "top-right",         // {positions}
    animated: true,                // hover animation effect
    glowing: false,                // glowing effect
    showIcon: true,                // show flag icon
    customText: "{label}"      // custom badge text
  }});
</script>
```

Unknown `style`, `size` or `position` values throw an error instead of
attaching a badge.

## License

MIT
"#,
        css_url = snippet.asset_url(STYLESHEET_FILE),
        js_url = snippet.asset_url(RUNTIME_FILE),
        styles = quoted(BadgeStyle::ALL.iter().map(|s| s.as_str()).collect()),
        sizes = quoted(BadgeSize::ALL.iter().map(|s| s.as_str()).collect()),
        positions = quoted(BadgePosition::ALL.iter().map(|p| p.as_str()).collect()),
        label = DEFAULT_LABEL,
    )
}

fn write_asset(path: PathBuf, content: &str) -> Result<PathBuf, AssetError> {
    std::fs::write(&path, content).map_err(|source| AssetError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(path)
}

/// Write the stylesheet, runtime script and README into `out_dir`
pub fn build_assets(out_dir: &Path, snippet: &SnippetConfig) -> Result<AssetManifest, AssetError> {
    log::info!("building badge assets in {}", out_dir.display());
    std::fs::create_dir_all(out_dir).map_err(|source| AssetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    Ok(AssetManifest {
        stylesheet: write_asset(out_dir.join(STYLESHEET_FILE), &generate_stylesheet(snippet))?,
        runtime: write_asset(out_dir.join(RUNTIME_FILE), &generate_runtime_script())?,
        readme: write_asset(out_dir.join(README_FILE), &generate_readme(snippet))?,
    })
}
