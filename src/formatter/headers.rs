//! Header resolution: the ordered, de-duplicated column set
//!
//! The first record's keys seed the order; keys first seen in later records
//! append in first-seen order. The first record's key order is therefore
//! always a prefix of the final header order.

use crate::parser::validation::Record;
use std::collections::HashSet;

/// Ordered set of unique column keys
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve headers across a sequence of records
    pub fn resolve<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut headers = Self::new();
        for record in records {
            headers.extend_from_record(record);
        }
        headers
    }

    /// Append any of the record's keys not already present, in record order
    pub fn extend_from_record(&mut self, record: &Record) {
        for key in record.keys() {
            self.push(key);
        }
    }

    /// Append a single key if it is not already present
    pub fn push(&mut self, key: &str) {
        if self.seen.insert(key.to_string()) {
            self.keys.push(key.to_string());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }
}
