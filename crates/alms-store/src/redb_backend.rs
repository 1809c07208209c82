//! redb-based persistent ledger backend

use crate::{LedgerBackend, Result, ScanIter};
use redb::{Database, TableDefinition};
use std::path::{Path, PathBuf};

const RECORDS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("records");

/// redb-based persistent ledger
///
/// Stores the whole namespace in a single table of a `.redb` file with
/// automatic crash recovery. Each `put`/`delete` runs in its own committed
/// write transaction; `get` and `scan` run against read transactions, so a
/// scan cursor iterates one consistent snapshot of the table.
pub struct RedbLedger {
    db: Database,
    path: PathBuf,
}

impl RedbLedger {
    /// Create or open a ledger at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(&path)?;

        // Initialize the table so an empty ledger scans cleanly
        let write_txn = db.begin_write()?;
        {
            write_txn.open_table(RECORDS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db, path })
    }

    /// Get the file path of this ledger
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerBackend for RedbLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;

        // ReadOnlyTable ranges are 'static: the table keeps the snapshot
        // alive, so the cursor owns everything it iterates.
        let range = match (start.is_empty(), end.is_empty()) {
            (true, true) => table.range::<&str>(..)?,
            (false, true) => table.range(start..)?,
            (true, false) => table.range(..end)?,
            (false, false) => table.range(start..end)?,
        };

        Ok(Box::new(range.map(|entry| {
            let (key, value) = entry?;
            Ok((key.value().to_string(), value.value().to_vec()))
        })))
    }
}
