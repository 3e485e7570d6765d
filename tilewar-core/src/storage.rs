//! Per-bot scratch storage persisted across rounds

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Key-value store private to one bot for the length of a session.
///
/// The engine hands it to the bot on every decision and never reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BotStorage {
    values: FxHashMap<String, Value>,
}

impl BotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value, `None` if absent or not decodable as `T`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Raw JSON value for a key
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Store a value, replacing any previous one
    pub fn insert<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> serde_json::Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.into(), value);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
