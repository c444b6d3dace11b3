use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use storefront_common::error::{StorageError, StorageResult};
use storefront_common::ports::storage::KeyValueStore;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Slots kept in a single JSON object on disk.
///
/// The whole file is read once on open and rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; so is one
    /// that does not hold a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path: PathBuf = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(raw) => parse_slots(&path, &raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no storage file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        Ok(Self { path, slots })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every slot to a sibling temp file and renames it over the store,
    /// so the file on disk is always either the old or the new content.
    fn flush(&self) -> StorageResult<()> {
        let dir: &Path = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        let io_err = |path: &Path| {
            let path: PathBuf = path.to_path_buf();
            move |source: io::Error| StorageError::Io { path, source }
        };
        fs::create_dir_all(dir).map_err(io_err(dir))?;

        let raw: String = serde_json::to_string_pretty(&self.slots)?;
        let mut staged = NamedTempFile::new_in(dir).map_err(io_err(dir))?;
        staged.write_all(raw.as_bytes()).map_err(io_err(staged.path()))?;
        staged.as_file().sync_all().map_err(io_err(staged.path()))?;
        staged
            .persist(&self.path)
            .map_err(|e| io_err(&self.path)(e.error))?;
        Ok(())
    }
}

fn parse_slots(path: &Path, raw: &str) -> BTreeMap<String, String> {
    match serde_json::from_str(raw) {
        Ok(slots) => slots,
        Err(e) => {
            warn!("ignoring unreadable storage file {}: {e}", path.display());
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.slots.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
