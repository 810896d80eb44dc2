use iconfont_core::{extract_icon_ids, render_declaration};
use pretty_assertions::assert_eq;

#[test]
fn ids_keep_document_order_and_duplicates() {
    let script = r#"window._iconfont_svg_string_1='<svg><symbol id="icon-a" viewBox="0 0 1024 1024"></symbol><symbol id="icon-b"></symbol><symbol id="icon-a"></symbol></svg>'"#;
    assert_eq!(extract_icon_ids(script), vec!["icon-a", "icon-b", "icon-a"]);
}

#[test]
fn script_without_symbols_yields_nothing() {
    assert!(extract_icon_ids("console.log('no icons')").is_empty());
}

#[test]
fn declaration_is_a_string_union() {
    let ids = vec!["icon-a".to_string(), "icon-b".to_string()];
    assert_eq!(
        render_declaration(&ids),
        r#"declare type Iconfont = "icon-a"|"icon-b""#
    );
}

#[test]
fn empty_declaration_is_the_empty_string_literal() {
    assert_eq!(render_declaration(&[]), r#"declare type Iconfont = """#);
}
