//! Counter persisted as `{"count": <integer>}` in a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{CounterError, VisitCounter};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CounterFile {
    #[serde(default)]
    count: u64,
}

pub struct FileCounter {
    path: PathBuf,
    /// Held across read-modify-write in `increment`
    write_lock: Mutex<()>,
}

impl FileCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_count(&self) -> Result<u64, CounterError> {
        let content = fs::read_to_string(&self.path)?;
        let file: CounterFile = serde_json::from_str(&content)?;
        Ok(file.count)
    }

    /// Write through a sibling temp file so readers never see a partial file.
    fn write_count(&self, count: u64) -> Result<(), CounterError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&CounterFile { count })?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl VisitCounter for FileCounter {
    fn get(&self) -> u64 {
        match self.read_count() {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "counter unreadable, using 0: {e}");
                0
            }
        }
    }

    fn increment(&self) -> Result<u64, CounterError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| CounterError::LockPoisoned)?;

        let next = self.get().saturating_add(1);
        self.write_count(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_counts_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let counter = FileCounter::new(dir.path().join("visitor-count.json"));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_corrupt_file_counts_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitor-count.json");
        fs::write(&path, "not json").unwrap();

        let counter = FileCounter::new(&path);
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.increment().unwrap(), 1);
    }

    #[test]
    fn test_missing_count_field_counts_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitor-count.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(FileCounter::new(&path).get(), 0);
    }

    #[test]
    fn test_increment_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitor-count.json");
        fs::write(&path, r#"{"count": 41}"#).unwrap();

        let counter = FileCounter::new(&path);
        assert_eq!(counter.get(), 41);
        assert_eq!(counter.increment().unwrap(), 42);

        let reopened = FileCounter::new(&path);
        assert_eq!(reopened.get(), 42);

        let stored: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored, serde_json::json!({ "count": 42 }));
        assert!(!counter.tmp_path().exists());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let counter = FileCounter::new(dir.path().join("data").join("visitor-count.json"));

        assert_eq!(counter.increment().unwrap(), 1);
        assert!(counter.path().exists());
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let counter = FileCounter::new(dir.path().join("visitor-count.json"));

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..25 {
                        counter.increment().unwrap();
                    }
                });
            }
        });

        assert_eq!(counter.get(), 200);
    }
}
