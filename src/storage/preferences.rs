/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Key-value preference storage
//!
//! Values are strings or ordered lists of strings. Reads are infallible
//! (absent or mistyped values read as `None`), writes are last-write-wins
//! per key.

use crate::error::AppResult;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Synchronous, durable key-value store.
///
/// The tracker calls it while holding its state lock, so every watchlist
/// read and write is ordered with the in-memory state. Calls block the
/// current runtime thread and should return quickly.
pub trait PreferenceStore: Send + Sync {
    /// Ordered list stored under `key`
    fn get_list(&self, key: &str) -> Option<Vec<String>>;

    /// Replaces the list stored under `key`
    fn set_list(&self, key: &str, values: &[String]) -> AppResult<()>;

    /// String stored under `key`
    fn get_string(&self, key: &str) -> Option<String>;

    /// Replaces the string stored under `key`
    fn set_string(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Reads `value` as a list of strings; any non-string element rejects the whole list
pub(crate) fn value_as_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

pub(crate) fn list_as_value(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryPreferenceStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored entry as a JSON object
    pub fn snapshot(&self) -> Map<String, Value> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_list(&self, key: &str) -> Option<Vec<String>> {
        value_as_list(&self.get(key)?)
    }

    fn set_list(&self, key: &str, values: &[String]) -> AppResult<()> {
        self.set(key, list_as_value(values));
        Ok(())
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)?.as_str().map(str::to_string)
    }

    fn set_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, Value::String(value.to_string()));
        Ok(())
    }
}
