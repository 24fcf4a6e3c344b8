// changelog data structures

use super::topic::Topic;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// represents a single classified changelog line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub topic: Topic,
    pub task: String, // fragment name without extension
    pub text: String,
}

impl ChangelogEntry {
    pub fn new(topic: Topic, task: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            topic,
            task: task.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.text, self.task)
    }
}

/// raw content of one fragment file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogFragment {
    pub name: String,
    pub lines: Vec<String>,
}

impl ChangelogFragment {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// read a fragment from disk, named after its file name
    ///
    /// invalid utf-8 sequences are replaced with `U+FFFD`
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::new(
            name,
            content.lines().map(str::to_string).collect(),
        ))
    }

    /// task identifier, the name with a trailing `.md` removed (any case)
    pub fn task(&self) -> &str {
        let name = self.name.as_str();
        let split = name.len().saturating_sub(3);
        match (name.get(..split), name.get(split..)) {
            (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".md") => stem,
            _ => name,
        }
    }
}
