//! The record store: four JSON collections kept in a key-value backend.
//!
//! Every write is persisted immediately. When the backend is missing or
//! fails, reads fall back to the seed data and writes are dropped; callers
//! never see a storage error. A key whose stored value cannot be decoded is
//! left untouched until an import replaces it.

mod activities;
mod contacts;
mod deals;
pub mod ids;
mod settings;
pub mod snapshot;
pub mod stats;

pub use snapshot::Snapshot;

use crate::db::KeyValueStorage;
use crate::models::seed;
use ids::IdGenerator;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const CONTACTS_KEY: &str = "mini-crm-contacts";
pub const DEALS_KEY: &str = "mini-crm-deals";
pub const ACTIVITIES_KEY: &str = "mini-crm-activities";
pub const SETTINGS_KEY: &str = "mini-crm-settings";

/// Records addressed by a string identifier.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for crate::models::Contact {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for crate::models::Deal {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct RecordStore {
    backend: Option<Box<dyn KeyValueStorage>>,
    ids: IdGenerator,
}

impl RecordStore {
    /// Wrap `backend` and seed every collection key that is not stored yet.
    ///
    /// Call once at startup. If the backend cannot even be queried the store
    /// runs without storage.
    pub fn initialize<S: KeyValueStorage + 'static>(backend: S) -> Self {
        let mut store = Self {
            backend: Some(Box::new(backend)),
            ids: IdGenerator::new(),
        };

        if let Err(e) = store.seed_missing() {
            warn!(error = %e, "storage unavailable, falling back to seed data");
            store.backend = None;
        }

        store
    }

    /// A store with no durable storage: reads return seed data, writes are no-ops.
    pub fn without_storage() -> Self {
        Self {
            backend: None,
            ids: IdGenerator::new(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.backend.is_some()
    }

    fn seed_missing(&mut self) -> crate::errors::AppResult<()> {
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };

        let seeds = [
            (CONTACTS_KEY, serde_json::to_string(&seed::contacts())?),
            (DEALS_KEY, serde_json::to_string(&seed::deals())?),
            (ACTIVITIES_KEY, serde_json::to_string(&seed::activities())?),
            (SETTINGS_KEY, serde_json::to_string(&seed::settings())?),
        ];

        for (key, value) in seeds {
            if !backend.contains(key)? {
                backend.set(key, &value)?;
                debug!(key, "seeded collection");
            }
        }
        Ok(())
    }

    /// Read and decode `key`, or build the fallback when it is absent or unreadable.
    fn load<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        self.load_for_update(key, fallback).value
    }

    /// Like [`load`](Self::load), but remembers whether the value may be
    /// written back. A key that holds something undecodable, or that could
    /// not be read, is never overwritten by a mutation.
    fn load_for_update<T, F>(&self, key: &str, fallback: F) -> Loaded<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(backend) = self.backend.as_ref() else {
            return Loaded::writable(fallback());
        };

        match backend.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(v) => Loaded::writable(v),
                Err(e) => {
                    warn!(key, error = %e, "stored collection cannot be decoded, using seed data read-only");
                    Loaded::read_only(fallback())
                }
            },
            Ok(None) => Loaded::writable(fallback()),
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using seed data read-only");
                Loaded::read_only(fallback())
            }
        }
    }

    /// Persist a collection read with [`load_for_update`](Self::load_for_update).
    /// Returns whether the value reached storage.
    fn save_loaded<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
        writable: bool,
    ) -> bool {
        if !writable {
            warn!(key, "stored collection is unreadable, write dropped");
            return false;
        }
        self.save(key, value)
    }

    /// Serialize and persist `value`; failures are logged and swallowed.
    /// Returns whether the value reached storage.
    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let Some(backend) = self.backend.as_mut() else {
            debug!(key, "no storage, write dropped");
            return false;
        };

        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "could not serialize collection, write dropped");
                return false;
            }
        };

        match backend.set(key, &raw) {
            Ok(()) => {
                debug!(key, bytes = raw.len(), "collection saved");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "storage write failed, write dropped");
                false
            }
        }
    }

    /// Best-effort entry in the backend journal.
    fn note(&mut self, operation: &str, target: &str, message: &str) {
        if let Some(backend) = self.backend.as_mut()
            && let Err(e) = backend.journal(operation, target, message)
        {
            warn!(operation, error = %e, "failed to write internal log");
        }
    }
}

/// A collection as read for a mutation.
struct Loaded<T> {
    value: T,
    writable: bool,
}

impl<T> Loaded<T> {
    fn writable(value: T) -> Self {
        Self {
            value,
            writable: true,
        }
    }

    fn read_only(value: T) -> Self {
        Self {
            value,
            writable: false,
        }
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
