use std::collections::HashMap;

use parking_lot::RwLock;

use super::code::CountryCode;
use super::record::CountryRecord;

/// In-memory response cache keyed by canonical country code.
///
/// Only successful lookups are stored. Lives as long as the client.
#[derive(Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<CountryCode, CountryRecord>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &CountryCode) -> Option<CountryRecord> {
        self.entries.read().get(code).cloned()
    }

    pub fn insert(&self, code: CountryCode, record: CountryRecord) {
        self.entries.write().insert(code, record);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
