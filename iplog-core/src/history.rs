//! Operations on the stored history which take raw user input.

use crate::store::{RecordId, RecordStore, ResolvedRecord};
use crate::{IplogError, Result};

/// Parse a record id typed by the user.
pub fn parse_id(raw: &str) -> Result<RecordId> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_| IplogError::InvalidIdentifier(raw.trim().to_string()))
}

/// Delete the record whose id is given as raw text, and return the removed
/// record. Nothing is touched when the id is malformed or unknown.
pub fn delete_record(store: &dyn RecordStore, raw: &str) -> Result<ResolvedRecord> {
    let id = parse_id(raw)?;

    let found = store.get(id)?.ok_or(IplogError::RecordNotFound(id))?;

    if !store.delete(id)? {
        return Err(IplogError::RecordNotFound(id));
    }

    info!("record#{} ({}) is deleted", id, &found.hostname);

    Ok(found)
}

pub fn list(store: &dyn RecordStore) -> Result<Vec<ResolvedRecord>> {
    store.list_all()
}

pub fn clear(store: &dyn RecordStore) -> Result<usize> {
    store.clear().map_err(|e| {
        error!("failed to clear records: {}", e);
        e
    })
}
