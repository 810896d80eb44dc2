use std::path::PathBuf;

use crate::options::{DEFAULT_DECLARATION_PATH, DEFAULT_MANIFEST_PATH};
use crate::paths::{resolve_output_file, resolve_paths, FontFormat, ResolvedPaths};
use crate::{BuildContext, HtmlTag, PluginOptions};

/// Content a planned write is produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Script,
    Stylesheet,
    /// Stylesheet with its remote font references pointed at local copies.
    LocalizedStylesheet,
    Font(FontFormat),
    Manifest,
    Declaration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStep {
    pub target: PathBuf,
    pub source: AssetSource,
}

/// Everything one transform call will do, computed without touching IO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformPlan {
    pub paths: ResolvedPaths,
    pub writes: Vec<WriteStep>,
    pub tags: Vec<HtmlTag>,
}

impl TransformPlan {
    pub fn needs_manifest(&self) -> bool {
        self.writes
            .iter()
            .any(|step| step.source == AssetSource::Manifest)
    }

    /// Font formats that have to be downloaded, in write order.
    pub fn fonts_to_fetch(&self) -> Vec<(FontFormat, &str)> {
        self.writes
            .iter()
            .filter_map(|step| match step.source {
                AssetSource::Font(format) => self
                    .paths
                    .fonts
                    .iter()
                    .find(|(candidate, _)| *candidate == format)
                    .map(|(_, path)| (format, path.remote_url.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// Plans the writes and tags of one HTML transform.
pub fn plan_transform(options: &PluginOptions, ctx: &BuildContext) -> TransformPlan {
    let paths = resolve_paths(options, ctx);
    let mut writes = Vec::new();
    let mut tags = Vec::new();

    if let Some(path) = options.icon_json.path_or(DEFAULT_MANIFEST_PATH) {
        writes.push(WriteStep {
            target: resolve_output_file(&ctx.root, path),
            source: AssetSource::Manifest,
        });
    }
    if let Some(path) = options.dts.path_or(DEFAULT_DECLARATION_PATH) {
        writes.push(WriteStep {
            target: resolve_output_file(&ctx.root, path),
            source: AssetSource::Declaration,
        });
    }

    if options.symbol {
        if let Some(target) = paths.script.disk_path.clone() {
            writes.push(WriteStep {
                target,
                source: AssetSource::Script,
            });
        }
        if options.inject {
            tags.push(HtmlTag::script(paths.script.public_url.clone()));
        }
    }

    if options.css {
        if let Some(target) = paths.stylesheet.disk_path.clone() {
            let source = if options.inject {
                AssetSource::LocalizedStylesheet
            } else {
                AssetSource::Stylesheet
            };
            writes.push(WriteStep { target, source });
        }
        for (format, font) in &paths.fonts {
            if let Some(target) = font.disk_path.clone() {
                writes.push(WriteStep {
                    target,
                    source: AssetSource::Font(*format),
                });
            }
        }
        if options.inject {
            tags.push(HtmlTag::stylesheet(paths.stylesheet.public_url.clone()));
        }
    }

    TransformPlan {
        paths,
        writes,
        tags,
    }
}
