//! Query Envelope Builder
//!
//! Wraps every read-path payload with the transaction id and timestamp of
//! the invocation that produced it:
//!
//! ```json
//! { "assetstate": { "asset": <payload> }, "txnid": "<id>", "txnts": "<timestamp>" }
//! ```

use custody_core::TxnContext;
use serde::{Deserialize, Serialize};

/// Inner `assetstate` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetState<T> {
    /// The wrapped payload
    pub asset: T,
}

/// Read-path response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEnvelope<T> {
    /// Wrapped payload
    pub assetstate: AssetState<T>,
    /// Transaction id
    pub txnid: String,
    /// Transaction timestamp, `YYYY-MM-DDThh:mm:ss.nnnnnnnnnZ`
    pub txnts: String,
}

impl<T> QueryEnvelope<T> {
    /// Wrap `payload` with the metadata of `ctx`.
    pub fn wrap<C: TxnContext + ?Sized>(payload: T, ctx: &C) -> Self {
        Self {
            assetstate: AssetState { asset: payload },
            txnid: ctx.txn_id().to_string(),
            txnts: ctx.txn_timestamp().render(),
        }
    }

    /// The wrapped payload.
    pub fn payload(&self) -> &T {
        &self.assetstate.asset
    }

    /// Unwrap the payload.
    pub fn into_payload(self) -> T {
        self.assetstate.asset
    }
}
