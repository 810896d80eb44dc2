use std::sync::LazyLock;

use regex::Regex;

static SYMBOL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"id="([^"\n]+)""#).expect("symbol id pattern is valid")
});

/// Collects every `id="..."` value of the symbol script, in document order.
/// Duplicates are kept.
pub fn extract_icon_ids(script: &str) -> Vec<String> {
    SYMBOL_ID
        .captures_iter(script)
        .filter_map(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
        .collect()
}

/// Renders the `Iconfont` string-union type declaration.
///
/// An empty list renders as `""`, a union of the empty string alone.
pub fn render_declaration(ids: &[String]) -> String {
    format!("declare type Iconfont = \"{}\"", ids.join("\"|\""))
}
