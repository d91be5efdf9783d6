//! Escaping of user text embedded in generated markup and scripts

/// Escape special XML/HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Quote a string as a JavaScript string literal
///
/// The result is a JSON string with `<`, `>` and `&` additionally escaped, so
/// it can sit inside an inline `<script>` element without closing it.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
