use crate::model::ControllerFile;
use crate::resolver::scan;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Candidate controller files indexed for name lookup. Purely a filename
/// index; file contents are never inspected here.
#[derive(Debug, Clone)]
pub struct ControllerIndex {
    files: Vec<PathBuf>,
    ext: String,
}

impl ControllerIndex {
    /// Scan `controllers_root` for candidate files. The scan is sorted, so
    /// `resolve` picks the lexicographically first candidate when several
    /// subdirectories hold a file with the same name.
    pub fn build(controllers_root: &Path, ext: &str) -> Result<Self> {
        Ok(Self {
            files: scan::locate_files(controllers_root, ext)?,
            ext: ext.to_string(),
        })
    }

    pub fn from_files(files: Vec<PathBuf>, ext: &str) -> Self {
        Self {
            files,
            ext: ext.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find the candidate whose file name equals `<controller_name>.<ext>`.
    /// Full filename equality, first match wins.
    pub fn resolve(&self, controller_name: &str) -> ControllerFile {
        let wanted = format!("{controller_name}.{}", self.ext);
        self.files
            .iter()
            .find(|path| path.file_name().and_then(|name| name.to_str()) == Some(wanted.as_str()))
            .map(|path| ControllerFile::Found(path.clone()))
            .unwrap_or(ControllerFile::NotFound)
    }
}
