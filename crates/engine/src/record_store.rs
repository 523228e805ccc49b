//! Record Store Adapter
//!
//! Serializes asset records to and from the ledger. No caching: every call
//! goes to the ledger.

use custody_core::{AssetId, AssetRecord, LedgerState, RegistryError, RegistryResult};

/// Fetch the record stored under `id`.
///
/// # Errors
///
/// - `NotFound` when no bytes are stored under `id`
/// - `CorruptRecord` when bytes are present but do not parse, or when the
///   stored ledger key disagrees with `id`
pub fn get<S: LedgerState + ?Sized>(state: &mut S, id: &AssetId) -> RegistryResult<AssetRecord> {
    let bytes = state
        .get_state(id.as_str())?
        .ok_or_else(|| RegistryError::not_found(id.as_str()))?;

    let record: AssetRecord =
        serde_json::from_slice(&bytes).map_err(|e| RegistryError::CorruptRecord {
            key: id.to_string(),
            reason: e.to_string(),
        })?;

    if record.key() != id {
        return Err(RegistryError::CorruptRecord {
            key: id.to_string(),
            reason: format!("record is keyed '{}'", record.key()),
        });
    }
    Ok(record)
}

/// Write `record` under its own ledger key.
pub fn put<S: LedgerState + ?Sized>(state: &mut S, record: &AssetRecord) -> RegistryResult<()> {
    let bytes = serde_json::to_vec(record)
        .map_err(|e| RegistryError::store(format!("failed to encode {}: {}", record.key(), e)))?;
    state.put_state(record.key().as_str(), bytes)
}

/// True if any bytes are stored under `id`, parsable or not.
pub fn exists<S: LedgerState + ?Sized>(state: &mut S, id: &AssetId) -> RegistryResult<bool> {
    Ok(state.get_state(id.as_str())?.is_some())
}
