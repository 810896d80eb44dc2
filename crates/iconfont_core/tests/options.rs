use std::path::Path;

use iconfont_core::{BuildContext, BuildMode, ConfigError, OutputFile, PluginOptions, DEFAULT_BASE};
use pretty_assertions::assert_eq;

fn init_logging() {
    iconfont_logging::initialize_for_tests();
}

#[test]
fn defaults_match_the_hosted_icon_service() {
    init_logging();
    let options = PluginOptions::new("font_39925_q9gvn56eyoe");

    assert_eq!(options.base, DEFAULT_BASE);
    assert!(options.symbol);
    assert!(options.css);
    assert!(options.inject);
    assert_eq!(options.dist_path, None);
    assert_eq!(options.dts, OutputFile::Disabled);
    assert_eq!(options.icon_json, OutputFile::Disabled);
    assert_eq!(
        options.remote_base(),
        "//at.alicdn.com/t/c/font_39925_q9gvn56eyoe"
    );
}

#[test]
fn empty_url_is_rejected() {
    init_logging();
    assert_eq!(PluginOptions::new("").validate(), Err(ConfigError::MissingUrl));
    assert_eq!(PluginOptions::new("   ").validate(), Err(ConfigError::MissingUrl));
    assert_eq!(PluginOptions::new("font_1").validate(), Ok(()));
}

#[test]
fn json_options_fill_defaults_and_accept_flag_or_path() {
    init_logging();
    let options = PluginOptions::from_json(
        r#"{ "url": "font_1", "distPath": "iconfont", "dts": true, "iconJson": "types/icons.json" }"#,
    )
    .unwrap();

    assert_eq!(options.url, "font_1");
    assert_eq!(options.base, DEFAULT_BASE);
    assert_eq!(options.dist_path(), "iconfont");
    assert_eq!(options.dts, OutputFile::DefaultPath);
    assert_eq!(
        options.icon_json.path_or("unused"),
        Some(Path::new("types/icons.json"))
    );
    assert_eq!(options.dts.path_or("iconfont.d.ts"), Some(Path::new("iconfont.d.ts")));
}

#[test]
fn empty_string_output_is_disabled() {
    init_logging();
    let options = PluginOptions::from_json(r#"{ "url": "font_1", "dts": "", "iconJson": false }"#)
        .unwrap();
    assert!(!options.dts.is_enabled());
    assert!(!options.icon_json.is_enabled());
}

#[test]
fn malformed_json_is_a_config_error() {
    init_logging();
    let err = PluginOptions::from_json(r#"{ "url": 7 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn build_context_parses_camel_case_and_custom_modes() {
    init_logging();
    let ctx = BuildContext::from_json(
        r#"{ "mode": "staging", "root": "/project", "base": "/app/", "build": { "outDir": "out", "assetsDir": "static" } }"#,
    )
    .unwrap();

    assert_eq!(ctx.mode, BuildMode::Production);
    assert_eq!(ctx.root, Path::new("/project"));
    assert_eq!(ctx.base, "/app/");
    assert_eq!(ctx.build.out_dir, Path::new("out"));
    assert_eq!(ctx.build.assets_dir, "static");

    let dev = BuildContext::from_json(r#"{ "mode": "development" }"#).unwrap();
    assert!(dev.mode.is_dev());
    assert_eq!(dev.base, "/");
    assert_eq!(dev.build.assets_dir, "assets");
}
