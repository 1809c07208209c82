//! In-memory ledger backend for testing

use crate::{LedgerBackend, Result, ScanIter};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

/// In-memory ledger backend
///
/// Fast, non-persistent backend primarily for testing. All data is lost
/// when the ledger is dropped. An ordered map keeps scans key-lexicographic
/// without a sort pass.
pub struct MemoryLedger {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    /// Create a new empty in-memory ledger
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBackend for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        // Delete-of-absent is a no-op here
        self.entries.write().unwrap().remove(key);
        Ok(())
    }

    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>> {
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };

        // Snapshot the bounded range so the cursor does not hold the read
        // lock for its whole lifetime.
        let snapshot: Vec<(String, Vec<u8>)> = self
            .entries
            .read()
            .unwrap()
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_kv() {
        let mut ledger = MemoryLedger::new();

        ledger.put("a", b"one").unwrap();
        assert_eq!(ledger.get("a").unwrap(), Some(b"one".to_vec()));
        assert_eq!(ledger.get("b").unwrap(), None);

        ledger.delete("a").unwrap();
        assert_eq!(ledger.get("a").unwrap(), None);

        // Deleting an absent key is not an error
        ledger.delete("a").unwrap();
    }

    #[test]
    fn test_scan_is_ordered_and_bounded() {
        let mut ledger = MemoryLedger::new();
        for key in ["c", "a", "b", "d"] {
            ledger.put(key, key.as_bytes()).unwrap();
        }

        let all: Vec<String> = ledger
            .scan("", "")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(all, ["a", "b", "c", "d"]);

        // End bound is exclusive
        let bounded: Vec<String> = ledger
            .scan("b", "d")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(bounded, ["b", "c"]);
    }

    #[test]
    fn test_scan_of_empty_ledger_yields_nothing() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.scan("", "").unwrap().count(), 0);
        assert!(ledger.is_empty());
    }
}
