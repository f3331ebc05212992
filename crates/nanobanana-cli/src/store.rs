//! Local key-value store
//!
//! One JSON file per key under the user's data directory. Reads never fail:
//! a missing or unreadable value comes back as the type's default. There is
//! no locking, so two processes writing the same key race and the last
//! write wins.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "nanobanana";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `<data_dir>/nanobanana`
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(DATA_DIR);
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!("Failed to read {:?}: {}", path, e);
                }
                return T::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt value for {}: {}", key, e);
            T::default()
        })
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory {:?}", self.dir))?;

        let path = self.path_for(key);
        let content = serde_json::to_string(value).context("Failed to serialize value")?;
        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;

        tracing::debug!("Stored {} in {:?}", key, path);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {:?}", path)),
        }
    }
}
