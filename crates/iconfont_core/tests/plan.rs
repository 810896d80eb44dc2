use std::path::{Path, PathBuf};

use iconfont_core::{
    plan_transform, resolve_paths, AssetSource, BuildContext, BuildMode, FontFormat, OutputFile,
    PluginOptions,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    iconfont_logging::initialize_for_tests();
}

fn production(root: &str) -> BuildContext {
    BuildContext::new(BuildMode::Production, root)
}

fn relative<'a>(path: &'a Path, root: &str) -> &'a Path {
    path.strip_prefix(root).expect("path under root")
}

#[test]
fn production_paths_compose_out_assets_and_dist_path() {
    init_logging();
    let mut options = PluginOptions::new("myicons");
    options.dist_path = Some("fonts".to_string());
    let ctx = production("/project");

    let paths = resolve_paths(&options, &ctx);

    let css_disk = paths.stylesheet.disk_path.as_deref().unwrap();
    assert_eq!(relative(css_disk, "/project"), Path::new("dist/assets/fonts/myicons.css"));
    assert_eq!(paths.stylesheet.public_url, "/assets/fonts/myicons.css");
    assert_eq!(paths.stylesheet.remote_url, "//at.alicdn.com/t/c/myicons.css");
    assert_eq!(paths.script.public_url, "/assets/fonts/myicons.js");

    let fonts: Vec<_> = paths
        .fonts
        .iter()
        .map(|(format, path)| (*format, path.public_url.as_str(), path.remote_url.as_str()))
        .collect();
    assert_eq!(
        fonts,
        vec![
            (FontFormat::Woff, "/assets/fonts/myicons.woff", "//at.alicdn.com/t/c/myicons.woff"),
            (FontFormat::Ttf, "/assets/fonts/myicons.ttf", "//at.alicdn.com/t/c/myicons.ttf"),
            (FontFormat::Svg, "/assets/fonts/myicons.svg", "//at.alicdn.com/t/c/myicons.svg"),
        ]
    );
    assert_eq!(paths.manifest_url, "//at.alicdn.com/t/c/myicons.json");
}

#[test]
fn missing_dist_path_is_an_empty_segment() {
    init_logging();
    let options = PluginOptions::new("myicons");
    let paths = resolve_paths(&options, &production("/project"));

    assert_eq!(paths.script.public_url, "/assets/myicons.js");
    assert_eq!(
        relative(paths.script.disk_path.as_deref().unwrap(), "/project"),
        Path::new("dist/assets/myicons.js")
    );
}

#[test]
fn development_uses_remote_urls_and_writes_nothing() {
    init_logging();
    let options = PluginOptions::new("myicons");
    let ctx = BuildContext::new(BuildMode::Development, "/project");

    let plan = plan_transform(&options, &ctx);

    assert!(plan.writes.is_empty());
    assert!(plan.paths.fonts.is_empty());
    assert_eq!(plan.tags.len(), 2);
    assert_eq!(plan.tags[0].tag, "script");
    assert_eq!(plan.tags[0].attr("src"), Some("//at.alicdn.com/t/c/myicons.js"));
    assert_eq!(plan.tags[1].tag, "link");
    assert_eq!(plan.tags[1].attr("href"), Some("//at.alicdn.com/t/c/myicons.css"));
    assert_eq!(plan.tags[1].attr("type"), Some("text/css"));
}

#[test]
fn production_plan_writes_script_stylesheet_and_fonts() {
    init_logging();
    let options = PluginOptions::new("myicons");
    let plan = plan_transform(&options, &production("/project"));

    let sources: Vec<_> = plan.writes.iter().map(|step| step.source).collect();
    assert_eq!(
        sources,
        vec![
            AssetSource::Script,
            AssetSource::LocalizedStylesheet,
            AssetSource::Font(FontFormat::Woff),
            AssetSource::Font(FontFormat::Ttf),
            AssetSource::Font(FontFormat::Svg),
        ]
    );
    assert_eq!(plan.fonts_to_fetch().len(), 3);
    assert_eq!(plan.tags[0].attr("src"), Some("/assets/myicons.js"));
    assert_eq!(plan.tags[1].attr("href"), Some("/assets/myicons.css"));
}

#[test]
fn without_injection_assets_land_under_root_and_no_tags_are_planned() {
    init_logging();
    let mut options = PluginOptions::new("myicons");
    options.inject = false;
    options.dist_path = Some("public/iconfont".to_string());

    for mode in [BuildMode::Development, BuildMode::Production] {
        let plan = plan_transform(&options, &BuildContext::new(mode, "/project"));

        assert!(plan.tags.is_empty());
        assert!(plan.fonts_to_fetch().is_empty());
        let writes: Vec<_> = plan
            .writes
            .iter()
            .map(|step| (step.source, relative(&step.target, "/project").to_path_buf()))
            .collect();
        assert_eq!(
            writes,
            vec![
                (AssetSource::Script, PathBuf::from("public/iconfont/myicons.js")),
                (AssetSource::Stylesheet, PathBuf::from("public/iconfont/myicons.css")),
            ]
        );
    }
}

#[test]
fn disabled_bundles_are_neither_written_nor_tagged() {
    init_logging();
    let mut options = PluginOptions::new("myicons");
    options.css = false;

    let plan = plan_transform(&options, &production("/project"));
    assert_eq!(plan.tags.len(), 1);
    assert_eq!(plan.tags[0].tag, "script");
    assert_eq!(plan.writes.len(), 1);
    assert!(plan.fonts_to_fetch().is_empty());

    options.css = true;
    options.symbol = false;
    let plan = plan_transform(&options, &production("/project"));
    assert_eq!(plan.tags.len(), 1);
    assert_eq!(plan.tags[0].tag, "link");
    assert!(plan.writes.iter().all(|step| step.source != AssetSource::Script));
}

#[test]
fn generated_files_resolve_against_root() {
    init_logging();
    let mut options = PluginOptions::new("myicons");
    options.dts = OutputFile::DefaultPath;
    options.icon_json = OutputFile::Path(PathBuf::from("src/icons/iconfont.json"));

    let plan = plan_transform(&options, &BuildContext::new(BuildMode::Development, "/project"));

    assert!(plan.needs_manifest());
    let writes: Vec<_> = plan
        .writes
        .iter()
        .map(|step| (step.source, relative(&step.target, "/project").to_path_buf()))
        .collect();
    assert_eq!(
        writes,
        vec![
            (AssetSource::Manifest, PathBuf::from("src/icons/iconfont.json")),
            (AssetSource::Declaration, PathBuf::from("iconfont.d.ts")),
        ]
    );
}

#[test]
fn tags_serialize_for_the_build_tool() {
    init_logging();
    let plan = plan_transform(
        &PluginOptions::new("myicons"),
        &BuildContext::new(BuildMode::Development, "/project"),
    );
    let json = serde_json::to_value(&plan.tags).unwrap();
    assert_eq!(json[0]["tag"], "script");
    assert_eq!(json[0]["injectTo"], "head");
    assert_eq!(json[0]["attrs"]["src"], "//at.alicdn.com/t/c/myicons.js");
    assert_eq!(json[1]["attrs"]["type"], "text/css");
}
