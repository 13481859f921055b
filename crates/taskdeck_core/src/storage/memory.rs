//! In-memory backend for tests and ephemeral sessions.

use super::{BackendResult, KvBackend};
use std::collections::HashMap;

/// HashMap-backed key-value store. Never fails.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> BackendResult<Option<Vec<u8>>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> BackendResult<()> {
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
