use crate::error::{Error, Result};
use crate::utils::changelog::ChangelogFragment;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// lists, reads and removes fragment files in a single directory
pub struct FragmentExplorer {
    pub root_path: PathBuf,
    pub extension: String,
    excluded: Option<PathBuf>,
}

impl FragmentExplorer {
    pub fn new(root_path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        FragmentExplorer {
            root_path: root_path.into(),
            extension: extension.into(),
            excluded: None,
        }
    }

    /// never pick up this file as a fragment, even if it lives in the directory
    pub fn excluding(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.excluded = Some(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    /// list fragment files, sorted by file name
    ///
    /// subdirectories and files with other extensions are ignored
    pub fn list_fragments(&self) -> Result<Vec<PathBuf>> {
        let read_error = |source: std::io::Error| Error::DirectoryReadError {
            path: self.root_path.clone(),
            source,
        };

        let mut fragments = Vec::new();
        for entry in fs::read_dir(&self.root_path).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();

            if !path.is_file() || !self.has_fragment_extension(&path) {
                continue;
            }

            if self.is_excluded(&path) {
                warn!(path = %path.display(), "skipping destination file inside fragment directory");
                continue;
            }

            fragments.push(path);
        }

        fragments.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(
            dir = %self.root_path.display(),
            count = fragments.len(),
            "listed changelog fragments"
        );
        Ok(fragments)
    }

    /// read every listed fragment, failing on the first unreadable one
    pub fn read_fragments(&self) -> Result<Vec<(PathBuf, ChangelogFragment)>> {
        self.list_fragments()?
            .into_iter()
            .map(|path| {
                let fragment = ChangelogFragment::read(&path)?;
                debug!(
                    fragment = %fragment.name,
                    lines = fragment.lines.len(),
                    "read changelog fragment"
                );
                Ok((path, fragment))
            })
            .collect()
    }

    /// delete the given fragment files
    pub fn delete_all(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut deleted = Vec::with_capacity(paths.len());
        for path in paths {
            fs::remove_file(path).map_err(|e| Error::FileDeleteError {
                path: path.clone(),
                source: e,
            })?;
            debug!(path = %path.display(), "deleted merged fragment");
            deleted.push(path.clone());
        }
        Ok(deleted)
    }

    fn has_fragment_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension.as_str())
            .unwrap_or(false)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        match &self.excluded {
            Some(excluded) => path
                .canonicalize()
                .map(|p| &p == excluded)
                .unwrap_or(false),
            None => false,
        }
    }
}
