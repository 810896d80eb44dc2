use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    /// Only `development` counts as a dev build; custom modes build like production.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "development" {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_dev(self) -> bool {
        self == BuildMode::Development
    }
}

impl Serialize for BuildMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        })
    }
}

impl<'de> Deserialize<'de> for BuildMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mode = String::deserialize(deserializer)?;
        Ok(BuildMode::from_mode(&mode))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOutput {
    pub out_dir: PathBuf,
    pub assets_dir: String,
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            assets_dir: "assets".to_string(),
        }
    }
}

/// Resolved build configuration handed over by the build tool. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildContext {
    pub mode: BuildMode,
    /// Project root; relative output paths resolve against it.
    pub root: PathBuf,
    /// Public base path the built site is served from.
    pub base: String,
    pub build: BuildOutput,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            mode: BuildMode::Production,
            root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            base: "/".to_string(),
            build: BuildOutput::default(),
        }
    }
}

impl BuildContext {
    pub fn new(mode: BuildMode, root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}
