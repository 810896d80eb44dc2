use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::{BuildContext, PluginOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Woff,
    Ttf,
    Svg,
}

impl FontFormat {
    pub const ALL: [FontFormat; 3] = [FontFormat::Woff, FontFormat::Ttf, FontFormat::Svg];

    pub fn extension(self) -> &'static str {
        match self {
            FontFormat::Woff => "woff",
            FontFormat::Ttf => "ttf",
            FontFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where one asset comes from and where it ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    pub remote_url: String,
    /// URL the page references; the remote URL unless the asset is served locally.
    pub public_url: String,
    /// File the asset is persisted to, if it is persisted at all.
    pub disk_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub script: AssetPath,
    pub stylesheet: AssetPath,
    pub fonts: Vec<(FontFormat, AssetPath)>,
    pub manifest_url: String,
}

pub fn remote_asset_url(options: &PluginOptions, extension: &str) -> String {
    format!("{}.{extension}", options.remote_base())
}

/// Computes remote, public and disk locations for every asset of one build.
pub fn resolve_paths(options: &PluginOptions, ctx: &BuildContext) -> ResolvedPaths {
    let asset = |extension: &str| -> AssetPath {
        let remote_url = remote_asset_url(options, extension);
        let file_name = format!("{}.{extension}", options.url);

        if !options.inject {
            return AssetPath {
                public_url: remote_url.clone(),
                remote_url,
                disk_path: Some(join_segments(&ctx.root, &[options.dist_path(), file_name.as_str()])),
            };
        }

        if ctx.mode.is_dev() {
            return AssetPath {
                public_url: remote_url.clone(),
                remote_url,
                disk_path: None,
            };
        }

        let segments = [
            ctx.build.assets_dir.as_str(),
            options.dist_path(),
            file_name.as_str(),
        ];
        AssetPath {
            remote_url,
            public_url: public_path(&ctx.base, &segments),
            disk_path: Some(join_segments(&ctx.root.join(&ctx.build.out_dir), &segments)),
        }
    };

    let fonts = if options.inject && !ctx.mode.is_dev() {
        FontFormat::ALL
            .iter()
            .map(|format| (*format, asset(format.extension())))
            .collect()
    } else {
        Vec::new()
    };

    ResolvedPaths {
        script: asset("js"),
        stylesheet: asset("css"),
        fonts,
        manifest_url: remote_asset_url(options, "json"),
    }
}

/// Resolves a generated-file path against the project root.
pub fn resolve_output_file(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Joins URL path segments onto a public base, always with `/` separators.
///
/// Absolute bases (`https://cdn/app/`, `//cdn/app/`) keep their origin, `/`-rooted
/// bases stay rooted and anything else produces a relative path.
pub fn public_path(base: &str, segments: &[&str]) -> String {
    let tail = split_segments(segments).join("/");
    let base = base.replace('\\', "/");

    if let Ok(mut url) = Url::parse(&base) {
        if !url.cannot_be_a_base() {
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            if let Ok(joined) = url.join(&tail) {
                return joined.to_string();
            }
        }
    }

    if let Some(rest) = base.strip_prefix("//") {
        let mut parts = split_segments(&[rest]);
        parts.extend(split_segments(segments));
        return format!("//{}", parts.join("/"));
    }

    let mut parts = split_segments(&[base.as_str()]);
    parts.extend(split_segments(segments));
    let joined = parts.join("/");
    if base.starts_with('/') {
        format!("/{joined}")
    } else {
        joined
    }
}

fn split_segments<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    segments
        .iter()
        .flat_map(|segment| segment.split(['/', '\\']))
        .filter(|part| !part.is_empty() && *part != ".")
        .collect()
}

fn join_segments(base: &Path, segments: &[&str]) -> PathBuf {
    let mut path = base.to_path_buf();
    for part in split_segments(segments) {
        path.push(part);
    }
    path
}
