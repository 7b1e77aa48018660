use serde::{Deserialize, Serialize};

pub use sqlite::SqliteStore;

use crate::Result;

mod sqlite;

pub type RecordId = i64;

/// A hostname together with the address it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub id: RecordId,
    pub hostname: String,
    pub ip_address: String,
}

/// The durable history of resolved hostnames.
///
/// Ids are assigned by the store in insertion order and are never reused,
/// even after the record holding the highest id has been deleted.
pub trait RecordStore: Send + Sync + 'static {
    /// Append a new record and return its id once it is durable.
    fn insert(&self, hostname: &str, ip_address: &str) -> Result<RecordId>;

    fn get(&self, id: RecordId) -> Result<Option<ResolvedRecord>>;

    /// All records in insertion order.
    fn list_all(&self) -> Result<Vec<ResolvedRecord>>;

    /// Remove the record, returns false if there is no such record.
    fn delete(&self, id: RecordId) -> Result<bool>;

    /// Remove every record and return how many were removed. Nothing is
    /// removed if the operation fails.
    fn clear(&self) -> Result<usize>;
}
