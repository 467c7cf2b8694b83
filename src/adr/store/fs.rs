use super::{RecordStore, INDEX_FILE, TEMPLATE_FILE};
use crate::error::{AdrError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unavailable(&self, source: io::Error) -> AdrError {
        AdrError::StoreUnavailable {
            path: self.root.clone(),
            source,
        }
    }
}

impl RecordStore for FileStore {
    fn list_files(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.unavailable(e))?;
            let file_type = entry.file_type().map_err(|e| self.unavailable(e))?;
            if file_type.is_dir() {
                continue;
            }
            // Non UTF-8 names can never be record files.
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn ensure_ready(&mut self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| self.unavailable(e))
    }

    fn read_record(&self, filename: &str) -> Result<String> {
        let path = self.path_of(filename);
        fs::read_to_string(&path).map_err(|source| AdrError::RecordUnreadable { path, source })
    }

    fn write_record(&mut self, filename: &str, content: &str) -> Result<()> {
        let path = self.path_of(filename);
        fs::write(&path, content).map_err(|source| AdrError::RecordWriteFailed { path, source })
    }

    fn remove_record(&mut self, filename: &str) -> Result<()> {
        let path = self.path_of(filename);
        fs::remove_file(&path).map_err(|source| AdrError::CleanupFailed { path, source })
    }

    fn read_template(&self) -> Option<String> {
        let path = self.path_of(TEMPLATE_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "template unreadable, using built-in");
                None
            }
        }
    }

    fn write_template(&mut self, content: &str) -> Result<()> {
        self.write_record(TEMPLATE_FILE, content)
    }

    fn write_index(&mut self, content: &str) -> Result<()> {
        let path = self.path_of(INDEX_FILE);
        fs::write(&path, content).map_err(|source| AdrError::IndexWriteFailed { path, source })
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}
