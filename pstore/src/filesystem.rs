//! Filesystem-backed preference store: one JSON object per panel.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{PreferenceStore, PreferenceStoreError};

#[derive(Debug)]
pub struct FilesystemPreferenceStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FilesystemPreferenceStore {
    /// Opens (or creates) the preference file at `path`. A missing or
    /// unreadable file starts the store empty; only a missing parent
    /// directory that cannot be created is a hard error.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PreferenceStoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|error| {
                PreferenceStoreError::io(format!(
                    "failed to create preference directory: {error}"
                ))
            })?;
        }

        let values = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, String>>(&bytes) {
                Ok(values) => values,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "preference file is unreadable; starting with no preferences"
                    );
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "preference file could not be read; starting with no preferences"
                );
                HashMap::new()
            }
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let bytes = match serde_json::to_vec_pretty(values) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize preferences; write skipped");
                return;
            }
        };

        if let Err(error) = write_atomic(&self.path, &bytes) {
            tracing::warn!(
                path = %self.path.display(),
                %error,
                "failed to persist preferences; write skipped"
            );
        }
    }
}

impl PreferenceStore for FilesystemPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values();
        if values.remove(key).is_some() {
            self.persist(&values);
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}
