/// Points the stylesheet's remote font references at the sibling local copies.
///
/// Every occurrence of the remote base directory (protocol-relative or with an
/// explicit `http:`/`https:` scheme) becomes `.`, so
/// `url('//at.alicdn.com/t/c/font_1.woff?t=1')` turns into `url('./font_1.woff?t=1')`.
pub fn localize_stylesheet(css: &str, remote_base: &str) -> String {
    let without_scheme = remote_base
        .strip_prefix("https:")
        .or_else(|| remote_base.strip_prefix("http:"))
        .unwrap_or(remote_base);
    let prefix = without_scheme.trim_end_matches('/');
    if prefix.is_empty() || !prefix.starts_with("//") {
        return css.to_string();
    }

    css.replace(&format!("https:{prefix}"), ".")
        .replace(&format!("http:{prefix}"), ".")
        .replace(prefix, ".")
}
