use std::borrow::Cow;
use std::path::Path;

use futures_util::future::try_join_all;
use iconfont_core::{
    extract_icon_ids, localize_stylesheet, plan_transform, render_declaration, AssetSource,
    BuildContext, ConfigError, FontFormat, HtmlTag, PluginOptions,
};
use iconfont_logging::{iconfont_debug, iconfont_error, iconfont_info, iconfont_warn};

use crate::cache::CachingFetcher;
use crate::fetch::{output_text, Fetcher, ReqwestFetcher};
use crate::persist::{write_if_changed, WriteOutcome};
use crate::{FetchOutput, TransformError};

pub const PLUGIN_NAME: &str = "iconfont-auto";

/// Fetches the icon-font bundle for a build and hands back the tags to inject.
///
/// Construct once per build process; the default fetcher keeps a content cache
/// for the life of the plugin.
#[derive(Debug)]
pub struct IconfontPlugin<F = CachingFetcher<ReqwestFetcher>> {
    options: PluginOptions,
    fetcher: F,
}

impl IconfontPlugin {
    pub fn new(options: PluginOptions) -> Result<Self, ConfigError> {
        Self::with_fetcher(options, CachingFetcher::new(ReqwestFetcher::default()))
    }
}

impl<F: Fetcher> IconfontPlugin<F> {
    /// Validates `options` before any network or filesystem access.
    pub fn with_fetcher(options: PluginOptions, fetcher: F) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options, fetcher })
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The HTML transform hook: fetch, persist, and return the tags to inject.
    pub async fn transform_index_html(
        &self,
        ctx: &BuildContext,
    ) -> Result<Vec<HtmlTag>, TransformError> {
        let plan = plan_transform(&self.options, ctx);
        iconfont_debug!(
            "{} mode={:?} url={} local_dir={}",
            PLUGIN_NAME,
            ctx.mode,
            self.options.url,
            ctx.root.join(&self.options.url).is_dir()
        );

        let (script, stylesheet) = futures_util::try_join!(
            self.fetch(&plan.paths.script.remote_url),
            self.fetch(&plan.paths.stylesheet.remote_url)
        )?;

        let manifest = if plan.needs_manifest() {
            let manifest = self.fetch(&plan.paths.manifest_url).await?;
            log_manifest_summary(&manifest);
            Some(manifest)
        } else {
            None
        };

        let fonts: Vec<(FontFormat, FetchOutput)> =
            try_join_all(plan.fonts_to_fetch().into_iter().map(|(format, url)| async move {
                self.fetch(url).await.map(|output| (format, output))
            }))
            .await?;

        let script_text = output_text(&plan.paths.script.remote_url, &script);
        let stylesheet_text = output_text(&plan.paths.stylesheet.remote_url, &stylesheet);

        for step in &plan.writes {
            let content: Cow<'_, [u8]> = match step.source {
                AssetSource::Script => Cow::Borrowed(&script.bytes[..]),
                AssetSource::Stylesheet => Cow::Borrowed(&stylesheet.bytes[..]),
                AssetSource::LocalizedStylesheet => Cow::Owned(
                    localize_stylesheet(&stylesheet_text, &self.options.base).into_bytes(),
                ),
                AssetSource::Declaration => {
                    let ids = extract_icon_ids(&script_text);
                    iconfont_info!("declaring {} icon names", ids.len());
                    Cow::Owned(render_declaration(&ids).into_bytes())
                }
                AssetSource::Manifest => match &manifest {
                    Some(manifest) => Cow::Borrowed(&manifest.bytes[..]),
                    None => continue,
                },
                AssetSource::Font(format) => {
                    match fonts.iter().find(|(fetched, _)| *fetched == format) {
                        Some((_, font)) => Cow::Borrowed(&font.bytes[..]),
                        None => {
                            iconfont_error!("{} font was planned but not fetched", format);
                            continue;
                        }
                    }
                }
            };
            self.materialize(&step.target, &content)?;
        }

        iconfont_info!(
            "{}: {} tag(s) to inject, {} file(s) checked",
            PLUGIN_NAME,
            plan.tags.len(),
            plan.writes.len()
        );
        Ok(plan.tags)
    }

    /// Runs [`Self::transform_index_html`] on a private runtime, for synchronous hosts.
    pub fn transform_index_html_blocking(
        &self,
        ctx: &BuildContext,
    ) -> Result<Vec<HtmlTag>, TransformError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.transform_index_html(ctx))
    }

    async fn fetch(&self, url: &str) -> Result<FetchOutput, TransformError> {
        self.fetcher
            .fetch(url)
            .await
            .map_err(|source| TransformError::Fetch {
                url: url.to_string(),
                source,
            })
    }

    fn materialize(&self, path: &Path, content: &[u8]) -> Result<(), TransformError> {
        let outcome =
            write_if_changed(path, content).map_err(|source| TransformError::Persist {
                path: path.to_path_buf(),
                source,
            })?;
        match outcome {
            WriteOutcome::Written => iconfont_info!("wrote {}", path.display()),
            WriteOutcome::Unchanged => iconfont_debug!("unchanged {}", path.display()),
        }
        Ok(())
    }
}

fn log_manifest_summary(manifest: &FetchOutput) {
    match serde_json::from_slice::<serde_json::Value>(&manifest.bytes) {
        Ok(value) => {
            let glyphs = value
                .get("glyphs")
                .and_then(serde_json::Value::as_array)
                .map_or(0, Vec::len);
            iconfont_debug!("manifest lists {} glyphs", glyphs);
        }
        Err(err) => iconfont_warn!(
            "manifest from {} is not valid JSON ({}); mirroring it verbatim",
            manifest.metadata.original_url,
            err
        ),
    }
}
