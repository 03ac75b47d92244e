//! Durable key-value backends the record store writes its collections to.

use crate::errors::AppResult;
use std::collections::BTreeMap;

/// One serialized value per key, plus an optional operation journal.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Record a mutation in the internal log. Backends without one ignore it.
    fn journal(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Process-local backend, used by tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    journal: Vec<(String, String, String)>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// `(operation, target, message)` rows in write order.
    pub fn journal_entries(&self) -> &[(String, String, String)] {
        &self.journal
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn journal(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.journal
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}
