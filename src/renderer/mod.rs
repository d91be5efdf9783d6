//! Integration snippet generation
//!
//! This module turns a badge config into the text a merchant pastes into a
//! storefront: a CSS block, a self-contained HTML element, a runtime init
//! snippet, a standalone injection script or a React component.

pub mod config;
pub mod css;
pub mod escape;
pub mod html;
pub mod react;
pub mod script;

pub use config::SnippetConfig;
pub use css::{generate_css_block, generate_css_block_with_config, CssBuilder};
pub use html::{generate_html_block, generate_html_block_with_config};
pub use react::{generate_react_snippet, generate_react_snippet_with_config};
pub use script::{
    generate_init_snippet, generate_init_snippet_with_config, generate_injection_script,
    generate_injection_script_with_config,
};

use std::fmt;

/// Class carried by every badge element
pub const BADGE_CLASS: &str = "made-in-usa-badge";

/// Class of a badge variant, e.g. `made-in-usa-badge--ribbon`
pub fn modifier_class(variant: &str) -> String {
    format!("{}--{}", BADGE_CLASS, variant)
}

/// Kind of integration snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    Css,
    Html,
    /// `<link>`/`<script>` tags plus the runtime `init` call
    Script,
    /// Standalone script that needs only the stylesheet
    Inject,
    React,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 5] = [
        SnippetKind::Css,
        SnippetKind::Html,
        SnippetKind::Script,
        SnippetKind::Inject,
        SnippetKind::React,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SnippetKind::Css => "css",
            SnippetKind::Html => "html",
            SnippetKind::Script => "script",
            SnippetKind::Inject => "inject",
            SnippetKind::React => "react",
        }
    }

    /// Whether the snippet targets elements by selector
    pub fn needs_selector(self) -> bool {
        matches!(self, SnippetKind::Script | SnippetKind::Inject)
    }
}

impl fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute spelling of the icon markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMarkup {
    Html,
    Jsx,
}

/// The flag glyph as inline SVG
pub fn flag_icon(px: u32, markup: IconMarkup) -> String {
    let stroke_width = match markup {
        IconMarkup::Html => "stroke-width",
        IconMarkup::Jsx => "strokeWidth",
    };
    format!(
        r#"<svg width="{px}" height="{px}" viewBox="0 0 24 24" fill="none" stroke="currentColor" {stroke_width}="2"><path d="M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z"></path><line x1="4" x2="4" y1="22" y2="15"></line></svg>"#
    )
}
