use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE: &str = "//at.alicdn.com/t/c/";
pub const DEFAULT_MANIFEST_PATH: &str = "iconfont.json";
pub const DEFAULT_DECLARATION_PATH: &str = "iconfont.d.ts";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the `url` option (icon-set identifier) is required")]
    MissingUrl,
    #[error("invalid plugin options: {0}")]
    Parse(String),
}

/// An optional generated file: off, on at its default location, or on at an
/// explicit path. Accepts `false`, `true` or a path string when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawOutputFile", into = "RawOutputFile")]
pub enum OutputFile {
    #[default]
    Disabled,
    DefaultPath,
    Path(PathBuf),
}

impl OutputFile {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, OutputFile::Disabled)
    }

    /// The configured path, or `default` when enabled without one.
    pub fn path_or<'a>(&'a self, default: &'a str) -> Option<&'a Path> {
        match self {
            OutputFile::Disabled => None,
            OutputFile::DefaultPath => Some(Path::new(default)),
            OutputFile::Path(path) => Some(path.as_path()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawOutputFile {
    Flag(bool),
    Path(String),
}

impl From<RawOutputFile> for OutputFile {
    fn from(raw: RawOutputFile) -> Self {
        match raw {
            RawOutputFile::Flag(false) => OutputFile::Disabled,
            RawOutputFile::Flag(true) => OutputFile::DefaultPath,
            RawOutputFile::Path(path) if path.is_empty() => OutputFile::Disabled,
            RawOutputFile::Path(path) => OutputFile::Path(PathBuf::from(path)),
        }
    }
}

impl From<OutputFile> for RawOutputFile {
    fn from(file: OutputFile) -> Self {
        match file {
            OutputFile::Disabled => RawOutputFile::Flag(false),
            OutputFile::DefaultPath => RawOutputFile::Flag(true),
            OutputFile::Path(path) => RawOutputFile::Path(path.to_string_lossy().into_owned()),
        }
    }
}

/// Plugin configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Remote prefix the icon-set identifier is appended to.
    pub base: String,
    /// Icon-set identifier, e.g. `font_39925_q9gvn56eyoe`.
    pub url: String,
    /// Fetch/inject the symbol script bundle.
    pub symbol: bool,
    /// Fetch/inject the stylesheet bundle.
    pub css: bool,
    /// Optional subdirectory for persisted assets.
    pub dist_path: Option<String>,
    /// Inject tags into the page; when off, assets are only written to disk.
    pub inject: bool,
    /// Type declaration listing the icon names.
    pub dts: OutputFile,
    /// Mirror of the remote JSON manifest.
    pub icon_json: OutputFile,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            url: String::new(),
            symbol: true,
            css: true,
            dist_path: None,
            inject: true,
            dts: OutputFile::Disabled,
            icon_json: OutputFile::Disabled,
        }
    }
}

impl PluginOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Parse options from a JSON object, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        Ok(())
    }

    /// `base + url`, the prefix every remote asset URL is derived from.
    pub fn remote_base(&self) -> String {
        format!("{}{}", self.base, self.url)
    }

    pub fn dist_path(&self) -> &str {
        self.dist_path.as_deref().unwrap_or("")
    }
}
