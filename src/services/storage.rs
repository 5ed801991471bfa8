use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// Durable number store scoped to one named storage instance.
///
/// Reads resolve failures to `None` and writes are fire-and-forget: a caller
/// never sees a storage error through this trait.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<i64>;
    fn set(&self, key: &str, value: i64);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.borrow().get(key).copied()
    }

    fn set(&self, key: &str, value: i64) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Sled-backed store; survives process restarts.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open or create the storage instance at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, sled::Error> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    pub fn from_db(db: sled::Db) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Option<i64> {
        match self.db.get(key.as_bytes()) {
            Ok(Some(value)) => match <[u8; 8]>::try_from(value.as_ref()) {
                Ok(bytes) => Some(i64::from_be_bytes(bytes)),
                Err(_) => {
                    log::warn!("ignoring corrupted value for key {key}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("failed to read key {key}: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: i64) {
        if let Err(e) = self
            .db
            .insert(key.as_bytes(), value.to_be_bytes().to_vec())
            .and_then(|_| self.db.flush())
        {
            log::warn!("failed to write key {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.db.remove(key.as_bytes()).and_then(|_| self.db.flush()) {
            log::warn!("failed to remove key {key}: {e}");
        }
    }
}
