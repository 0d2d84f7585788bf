/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::{AppError, AppResult};
use crate::storage::preferences::{PreferenceStore, list_as_value, value_as_list};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Preference store backed by one JSON object on disk.
///
/// The file is read once on open; every write rewrites it through a
/// temporary file and a rename so a crash never leaves it half written.
/// Writes are synchronous file I/O on the calling thread.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
}

impl JsonFilePreferenceStore {
    /// Opens the store at `path`, starting empty when the file does not exist
    ///
    /// # Returns
    /// * `Err(AppError::Io)` - If the file exists but cannot be read
    /// * `Err(AppError::Deserialization)` - If it does not hold a JSON object
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = fs::read(&path)?;
            if raw.iter().all(u8::is_ascii_whitespace) {
                Map::new()
            } else {
                match serde_json::from_slice::<Value>(&raw) {
                    Ok(Value::Object(map)) => map,
                    Ok(_) => {
                        return Err(AppError::Deserialization(format!(
                            "{} does not hold a JSON object",
                            path.display()
                        )));
                    }
                    Err(e) => return Err(AppError::Deserialization(e.to_string())),
                }
            }
        } else {
            Map::new()
        };
        info!(
            "Opened preference file {} with {} keys",
            path.display(),
            values.len()
        );
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Opens the store at the platform default location
    pub fn open_default() -> AppResult<Self> {
        let path = super::config::default_preferences_path().ok_or_else(|| {
            AppError::InvalidInput("no configuration directory on this platform".to_string())
        })?;
        Self::open(path)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value);
        self.persist(&values)
    }

    /// Blocking: one compact write of the whole map plus a rename
    fn persist(&self, values: &Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty() && !p.exists())
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(values)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote {} keys to {}", values.len(), self.path.display());
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get_list(&self, key: &str) -> Option<Vec<String>> {
        value_as_list(&self.get(key)?)
    }

    fn set_list(&self, key: &str, values: &[String]) -> AppResult<()> {
        self.set(key, list_as_value(values))
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)?.as_str().map(str::to_string)
    }

    fn set_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, Value::String(value.to_string()))
    }
}
