mod config;
pub mod database;
pub mod memory;

pub use config::{ChartConfig, Config, LogConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Raw string key-value storage.
///
/// Single writer, single thread. Implementations persist each `set_raw`
/// synchronously before returning.
pub trait KvStore {
    /// Read the raw value stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read and deserialize `key`, falling back on any failure.
///
/// A missing key, a backend error, and malformed content all yield
/// `fallback`. This never fails.
pub fn get_or<T, S>(store: &S, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    let raw = match store.get_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored value, using fallback");
            return fallback;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed, using fallback");
            return fallback;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed stored value, using fallback");
            fallback
        }
    }
}

/// Serialize `value` as JSON and write it under `key`.
///
/// # Errors
/// Returns an error if serialization or the backend write fails.
pub fn put<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw)?;
    tracing::debug!(key, bytes = raw.len(), "stored value");
    Ok(())
}

/// The persisted collections and their versioned storage keys.
///
/// Bumping a version starts from an empty collection; old keys are not
/// migrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Treatments,
    SharedPeople,
    Cholesterol,
    FamilyHistory,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Treatments,
        Collection::SharedPeople,
        Collection::Cholesterol,
        Collection::FamilyHistory,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Collection::Treatments => "treatments_v1",
            Collection::SharedPeople => "sharedPeople_v1",
            Collection::Cholesterol => "cholesterol_v1",
            Collection::FamilyHistory => "familyHistory_v1",
        }
    }
}

/// Returns the data directory, creating it if needed.
///
/// `HEALTHDASH_DATA_DIR` overrides the location. Otherwise this is
/// `~/.config/healthdash[-dev]/`, with the `-dev` suffix when
/// `HEALTHDASH_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HEALTHDASH_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HEALTHDASH_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("healthdash-dev")
            } else {
                base_dir.join("healthdash")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
