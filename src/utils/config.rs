use super::changelog::HeadingStyle;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "changelog-merge.toml";

/// main configuration for changelog-merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// directory holding the changelog fragments (default: "./changelog/")
    pub changelog_dir: PathBuf,

    /// destination changelog file (default: "./CHANGELOG.md")
    pub changelog_file: PathBuf,

    /// locale of the date in the release heading (default: "de_DE")
    pub locale: String,

    /// delete fragments once they are merged
    pub delete_merged_files: bool,

    /// extension of fragment files, without the dot
    pub fragment_extension: String,

    /// markdown level of the topic headers
    pub heading_style: HeadingStyle,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            changelog_dir: PathBuf::from("./changelog/"),
            changelog_file: PathBuf::from("./CHANGELOG.md"),
            locale: "de_DE".to_string(),
            delete_merged_files: true,
            fragment_extension: "md".to_string(),
            heading_style: HeadingStyle::default(),
        }
    }
}

impl MergeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.changelog_dir = dir.into();
        self
    }

    pub fn changelog_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.changelog_file = file.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn delete_merged_files(mut self, delete: bool) -> Self {
        self.delete_merged_files = delete;
        self
    }

    pub fn fragment_extension(mut self, extension: impl Into<String>) -> Self {
        self.fragment_extension = extension.into();
        self
    }

    pub fn heading_style(mut self, style: HeadingStyle) -> Self {
        self.heading_style = style;
        self
    }

    /// resolve relative directory and file paths against `root`
    pub fn resolve_paths<P: AsRef<Path>>(mut self, root: P) -> Self {
        let root = root.as_ref();
        if self.changelog_dir.is_relative() {
            self.changelog_dir = root.join(&self.changelog_dir);
        }
        if self.changelog_file.is_relative() {
            self.changelog_file = root.join(&self.changelog_file);
        }
        self
    }

    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: MergeConfig = toml::from_str(&contents).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// find and load configuration file in the project root
    ///
    /// returns default config if no `changelog-merge.toml` exists. a file
    /// that exists but fails to parse is an error.
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Result<Self> {
        match Self::find_config_file(&root) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => Ok(Self::default()),
        }
    }

    /// find configuration file in the project root
    pub fn find_config_file<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}
