//! Read-path command handlers.

use custody_core::{AssetId, IdentityContext, LedgerState, TxnContext};
use custody_engine::Registry;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle ReadAsset command.
pub fn read_asset<S: LedgerState + TxnContext + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
    asset_id: AssetId,
    caller: String,
) -> Result<Output> {
    let env = convert_result(registry.read(state, &asset_id, &caller, identity))?;
    Ok(Output::Asset(env))
}

/// Handle ReadDocument command.
pub fn read_document<S: LedgerState + TxnContext + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
    asset_id: AssetId,
    caller: String,
) -> Result<Output> {
    let env = convert_result(registry.read_document(state, &asset_id, &caller, identity))?;
    Ok(Output::Document(env))
}

/// Handle ReadAllAssets command.
pub fn read_all_assets<S: LedgerState + TxnContext + ?Sized>(
    registry: &Registry,
    state: &mut S,
    identity: &IdentityContext,
) -> Result<Output> {
    let envs = convert_result(registry.list_all(state, identity))?;
    Ok(Output::Assets(envs))
}

/// Handle CheckUniqueness command.
pub fn check_uniqueness<S: LedgerState + ?Sized>(
    registry: &Registry,
    state: &mut S,
    asset_id: AssetId,
) -> Result<Output> {
    let free = convert_result(registry.check_uniqueness(state, &asset_id))?;
    Ok(Output::Bool(free))
}

/// Handle GetEcert command.
pub fn get_ecert<S: LedgerState + ?Sized>(
    registry: &Registry,
    state: &mut S,
    username: String,
) -> Result<Output> {
    let bytes = convert_result(registry.get_ecert(state, &username))?;
    Ok(Output::Credential(bytes))
}
