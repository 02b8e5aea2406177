use super::DataStore;
use crate::error::{JotError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Sibling path used for the write-then-rename dance.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "notes.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(JotError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_notes(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(JotError::Io)?;
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(notes).map_err(JotError::Serialization)?;

        // Write to a sibling temp file and rename into place, so a crash
        // mid-write leaves the previous document intact.
        let temp = self.temp_path();
        fs::write(&temp, content).map_err(JotError::Io)?;
        fs::rename(&temp, &self.path).map_err(JotError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, date: &str) -> Note {
        Note::with_date(title.to_string(), "content".to_string(), date.to_string())
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp.path().join("notes.json"));
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn round_trips_notes_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().join("notes.json"));

        let notes = vec![
            note("first", "01-01-2024 10:00:00"),
            note("second", "02-01-2024 11:30:00"),
            note("third", "03-01-2024 09:15:00"),
        ];
        store.save_notes(&notes).unwrap();

        let reloaded = FileStore::new(temp.path().join("notes.json"))
            .load_notes()
            .unwrap();
        assert_eq!(reloaded, notes);
    }

    #[test]
    fn malformed_document_is_a_serialization_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("notes.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load_notes(),
            Err(JotError::Serialization(_))
        ));
        // The fallback policy lives upstream; the file itself is untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn empty_collection_persists_as_an_empty_array() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("notes.json");
        let mut store = FileStore::new(&path);

        store.save_notes(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("notes.json");
        let mut store = FileStore::new(&path);

        store.save_notes(&[note("a", "01-01-2024 10:00:00")]).unwrap();
        assert!(path.exists());
        assert!(!temp.path().join("notes.json.tmp").exists());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("dir").join("notes.json");
        let mut store = FileStore::new(&path);

        store.save_notes(&[note("a", "01-01-2024 10:00:00")]).unwrap();
        assert!(path.exists());
    }
}
