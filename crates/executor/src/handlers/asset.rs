//! Mutating command handlers.
//!
//! - Init: uniqueness index and credentials
//! - CreateAsset: role-gated creation
//! - UpdateAsset: owner-gated partial update
//! - UpdateDocument: owner-gated document replacement

use custody_core::{AssetId, AssetPatch, IdentityContext, LedgerState};
use custody_engine::Registry;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle Init command.
pub fn init<S: LedgerState + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
    credentials: Vec<(String, String)>,
) -> Result<Output> {
    convert_result(registry.init(state, &credentials, identity))?;
    Ok(Output::Unit)
}

/// Handle CreateAsset command.
///
/// Unless the configuration says otherwise, creation is dispatched as the
/// regulatory role, whatever role the caller resolved to.
pub fn create_asset<S: LedgerState + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
    asset_id: AssetId,
) -> Result<Output> {
    let role = if registry.config().assume_regulator_on_create {
        Some(registry.policy().regulator())
    } else {
        identity.role
    };
    convert_result(registry.create(state, &asset_id, role))?;
    Ok(Output::Unit)
}

/// Handle UpdateAsset command.
pub fn update_asset<S: LedgerState + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
    patch: AssetPatch,
) -> Result<Output> {
    convert_result(registry.update(state, &patch, identity))?;
    Ok(Output::Unit)
}

/// Handle UpdateDocument command.
pub fn update_document<S: LedgerState + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
    patch: AssetPatch,
) -> Result<Output> {
    convert_result(registry.update_document(state, &patch, identity))?;
    Ok(Output::Unit)
}
