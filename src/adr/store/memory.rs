use super::{RecordStore, INDEX_FILE, TEMPLATE_FILE};
use crate::error::{AdrError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::PathBuf;

/// Operations an [`InMemoryStore`] can be told to fail.
#[derive(Debug, Default, Clone)]
pub struct Faults {
    pub list: bool,
    pub ensure_ready: bool,
    pub unreadable: BTreeSet<String>,
    pub read_only: BTreeSet<String>,
    pub remove: bool,
    pub index: bool,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, String>,
    pub faults: Faults,
}

fn denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "simulated failure")
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    pub fn index(&self) -> Option<&str> {
        self.file(INDEX_FILE)
    }
}

impl RecordStore for InMemoryStore {
    fn list_files(&self) -> Result<Vec<String>> {
        if self.faults.list {
            return Err(AdrError::StoreUnavailable {
                path: PathBuf::from("memory"),
                source: denied(),
            });
        }
        Ok(self.file_names())
    }

    fn ensure_ready(&mut self) -> Result<()> {
        if self.faults.ensure_ready {
            return Err(AdrError::StoreUnavailable {
                path: PathBuf::from("memory"),
                source: denied(),
            });
        }
        Ok(())
    }

    fn read_record(&self, filename: &str) -> Result<String> {
        let path = self.path_of(filename);
        if self.faults.unreadable.contains(filename) {
            return Err(AdrError::RecordUnreadable {
                path,
                source: denied(),
            });
        }
        self.files
            .get(filename)
            .cloned()
            .ok_or_else(|| AdrError::RecordUnreadable {
                path,
                source: io::ErrorKind::NotFound.into(),
            })
    }

    fn write_record(&mut self, filename: &str, content: &str) -> Result<()> {
        if self.faults.read_only.contains(filename) {
            return Err(AdrError::RecordWriteFailed {
                path: self.path_of(filename),
                source: denied(),
            });
        }
        self.files.insert(filename.to_string(), content.to_string());
        Ok(())
    }

    fn remove_record(&mut self, filename: &str) -> Result<()> {
        let path = self.path_of(filename);
        if self.faults.remove {
            return Err(AdrError::CleanupFailed {
                path,
                source: denied(),
            });
        }
        match self.files.remove(filename) {
            Some(_) => Ok(()),
            None => Err(AdrError::CleanupFailed {
                path,
                source: io::ErrorKind::NotFound.into(),
            }),
        }
    }

    fn read_template(&self) -> Option<String> {
        self.files.get(TEMPLATE_FILE).cloned()
    }

    fn write_template(&mut self, content: &str) -> Result<()> {
        self.write_record(TEMPLATE_FILE, content)
    }

    fn write_index(&mut self, content: &str) -> Result<()> {
        if self.faults.index {
            return Err(AdrError::IndexWriteFailed {
                path: self.path_of(INDEX_FILE),
                source: denied(),
            });
        }
        self.files.insert(INDEX_FILE.to_string(), content.to_string());
        Ok(())
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        PathBuf::from(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faults_map_to_step_errors() {
        let mut store = InMemoryStore::new().with_file("adr-001-a.md", "a");
        store.faults.unreadable.insert("adr-001-a.md".to_string());
        store.faults.read_only.insert("adr-001-a.md".to_string());
        store.faults.remove = true;
        store.faults.index = true;

        assert!(matches!(
            store.read_record("adr-001-a.md"),
            Err(AdrError::RecordUnreadable { .. })
        ));
        assert!(matches!(
            store.write_record("adr-001-a.md", "b"),
            Err(AdrError::RecordWriteFailed { .. })
        ));
        assert!(matches!(
            store.remove_record("adr-001-a.md"),
            Err(AdrError::CleanupFailed { .. })
        ));
        assert!(matches!(
            store.write_index("x"),
            Err(AdrError::IndexWriteFailed { .. })
        ));
        assert_eq!(store.file("adr-001-a.md"), Some("a"));
    }
}
