//! Caller identity resolution.
//!
//! The executor asks its [`IdentityResolver`] once per command. A failed
//! resolution does not abort the command: it proceeds as the anonymous
//! identity, which every gated check denies.

use custody_core::{CallerIdentity, IdentityContext, IdentityResolver, RegistryError, RegistryResult};
use tracing::warn;

/// Resolver that always asserts the same caller, or always fails.
///
/// Used by the CLI (`--user`/`--role`) and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    caller: Option<CallerIdentity>,
}

impl StaticIdentity {
    /// Always resolve to `username` with `role` label.
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            caller: Some(CallerIdentity::new(username, role)),
        }
    }

    /// Always fail to resolve.
    pub fn unavailable() -> Self {
        Self { caller: None }
    }
}

impl IdentityResolver for StaticIdentity {
    fn resolve_caller(&self) -> RegistryResult<CallerIdentity> {
        self.caller
            .clone()
            .ok_or_else(|| RegistryError::internal("no caller identity available"))
    }
}

/// Resolve the caller, falling back to the anonymous identity.
pub(crate) fn resolve_or_anonymous(resolver: &dyn IdentityResolver) -> IdentityContext {
    match resolver.resolve_caller() {
        Ok(caller) => {
            let ctx = IdentityContext::from_caller(caller);
            if ctx.role.is_none() {
                warn!(username = %ctx.username, "Caller role label not recognized");
            }
            ctx
        }
        Err(e) => {
            warn!(error = %e, "Failed to resolve caller identity; continuing as anonymous");
            IdentityContext::anonymous()
        }
    }
}
