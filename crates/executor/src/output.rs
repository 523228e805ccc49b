//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. [`Output::into_bytes`]
//! is the wire rendering the dispatch shell hands back to the caller.

use custody_engine::{AssetEnvelope, DocumentEnvelope};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Fixed liveness reply.
pub const PONG: &str = "Hello, world!";

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (init, create, update)
    Unit,

    /// Boolean result (uniqueness check)
    Bool(bool),

    /// Liveness reply
    Pong,

    /// One record in an envelope
    Asset(AssetEnvelope),

    /// One document in an envelope
    Document(DocumentEnvelope),

    /// Every listed record, each in its own envelope, in index order
    Assets(Vec<AssetEnvelope>),

    /// Raw stored credential
    Credential(Vec<u8>),
}

impl Output {
    /// Render for the caller.
    ///
    /// `Unit` is empty, `Bool` is `true`/`false`, `Pong` is the fixed
    /// greeting, envelopes are JSON, credentials are returned verbatim.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let to_json = |r: serde_json::Result<Vec<u8>>| {
            r.map_err(|e| Error::Serialization {
                reason: e.to_string(),
            })
        };
        match self {
            Output::Unit => Ok(Vec::new()),
            Output::Bool(b) => Ok(b.to_string().into_bytes()),
            Output::Pong => Ok(PONG.as_bytes().to_vec()),
            Output::Asset(env) => to_json(serde_json::to_vec(&env)),
            Output::Document(env) => to_json(serde_json::to_vec(&env)),
            Output::Assets(envs) => to_json(serde_json::to_vec(&envs)),
            Output::Credential(bytes) => Ok(bytes),
        }
    }
}
