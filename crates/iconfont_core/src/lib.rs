//! Iconfont core: options, path resolution and per-build planning. No IO.
mod context;
mod icons;
mod options;
mod paths;
mod plan;
mod stylesheet;
mod tags;

pub use context::{BuildContext, BuildMode, BuildOutput};
pub use icons::{extract_icon_ids, render_declaration};
pub use options::{
    ConfigError, OutputFile, PluginOptions, DEFAULT_BASE, DEFAULT_DECLARATION_PATH,
    DEFAULT_MANIFEST_PATH,
};
pub use paths::{
    public_path, remote_asset_url, resolve_output_file, resolve_paths, AssetPath, FontFormat,
    ResolvedPaths,
};
pub use plan::{plan_transform, AssetSource, TransformPlan, WriteStep};
pub use stylesheet::localize_stylesheet;
pub use tags::{HtmlTag, InjectTo};
