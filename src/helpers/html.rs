//! HTML and XML escaping helpers

use std::borrow::Cow;

/// Escape special XML characters (also safe for HTML attribute values)
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

/// Serialize a JSON-LD object for embedding in a `<script>` element
///
/// `</` is written as `<\/` so content can never close the script early.
pub fn json_ld_script(value: &serde_json::Value) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
