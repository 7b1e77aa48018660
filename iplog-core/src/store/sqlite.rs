use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::Result;

use super::{RecordId, RecordStore, ResolvedRecord};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS ip_addresses (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    hostname   VARCHAR NOT NULL,
    ip_address VARCHAR NOT NULL
)";

/// A record store kept in a single SQLite database file.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the database file, creating both the file and the table if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("open record store '{}'", path.display());
        Self::init(conn)
    }

    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run the operation in its own transaction. It is committed only when the
    /// operation succeeds, and rolled back when the transaction is dropped on
    /// any other path.
    fn with_tx<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let res = f(&tx)?;
        tx.commit()?;
        Ok(res)
    }
}

impl RecordStore for SqliteStore {
    fn insert(&self, hostname: &str, ip_address: &str) -> Result<RecordId> {
        let id = self.with_tx(|tx| {
            tx.execute(
                "INSERT INTO ip_addresses (hostname, ip_address) VALUES (?1, ?2)",
                params![hostname, ip_address],
            )?;
            Ok(tx.last_insert_rowid())
        })?;
        debug!("insert record#{}: {} -> {}", id, hostname, ip_address);
        Ok(id)
    }

    fn get(&self, id: RecordId) -> Result<Option<ResolvedRecord>> {
        self.with_tx(|tx| {
            let found = tx
                .query_row(
                    "SELECT id, hostname, ip_address FROM ip_addresses WHERE id = ?1",
                    params![id],
                    |row| {
                        Ok(ResolvedRecord {
                            id: row.get(0)?,
                            hostname: row.get(1)?,
                            ip_address: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(found)
        })
    }

    fn list_all(&self) -> Result<Vec<ResolvedRecord>> {
        self.with_tx(|tx| {
            let mut stmt =
                tx.prepare("SELECT id, hostname, ip_address FROM ip_addresses ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(ResolvedRecord {
                    id: row.get(0)?,
                    hostname: row.get(1)?,
                    ip_address: row.get(2)?,
                })
            })?;

            let mut records = vec![];
            for next in rows {
                records.push(next?);
            }
            Ok(records)
        })
    }

    fn delete(&self, id: RecordId) -> Result<bool> {
        let n = self.with_tx(|tx| {
            let n = tx.execute("DELETE FROM ip_addresses WHERE id = ?1", params![id])?;
            Ok(n)
        })?;
        debug!("delete record#{}: affected={}", id, n);
        Ok(n > 0)
    }

    fn clear(&self) -> Result<usize> {
        let n = self.with_tx(|tx| {
            let n = tx.execute("DELETE FROM ip_addresses", [])?;
            Ok(n)
        })?;
        info!("clear record store: {} record(s) removed", n);
        Ok(n)
    }
}
