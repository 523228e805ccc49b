//! Request normalization.
//!
//! Asset invocations carry one JSON argument shaped `{"asset": {...}}`. The
//! inner object is an [`AssetPatch`]: every field optional, `assetID` (or
//! `assetId`) naming the target record, `caller` the declared identity.

use custody_core::{AssetId, AssetPatch, RegistryError};
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct RequestBody {
    asset: AssetPatch,
}

/// Parse an asset payload.
pub(crate) fn parse_patch(payload: &str) -> Result<AssetPatch> {
    let body: RequestBody = serde_json::from_str(payload)
        .map_err(|e| Error::from(RegistryError::malformed(e.to_string())))?;
    Ok(body.asset)
}

/// The first argument, parsed as an asset payload.
pub(crate) fn required_patch(name: &str, args: &[String]) -> Result<AssetPatch> {
    let payload = args.first().ok_or_else(|| {
        Error::from(RegistryError::malformed(format!(
            "{} expects an asset payload argument",
            name
        )))
    })?;
    parse_patch(payload)
}

/// The first argument if present, otherwise an empty patch.
pub(crate) fn optional_patch(args: &[String]) -> Result<AssetPatch> {
    match args.first() {
        Some(payload) if !payload.trim().is_empty() => parse_patch(payload),
        _ => Ok(AssetPatch::default()),
    }
}

/// Canonical identifier of a patch.
pub(crate) fn asset_id(patch: &AssetPatch) -> AssetId {
    AssetId::new(patch.asset_id.as_str())
}

/// Pair up `username, credential, username, credential, ...`.
pub(crate) fn credential_pairs(args: &[String]) -> Result<Vec<(String, String)>> {
    if args.len() % 2 != 0 {
        return Err(RegistryError::malformed(format!(
            "init expects username/credential pairs, got {} arguments",
            args.len()
        ))
        .into());
    }
    Ok(args
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}
