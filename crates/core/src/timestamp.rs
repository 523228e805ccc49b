//! Transaction timestamp
//!
//! The ledger hands every invocation a timestamp as seconds plus
//! nanoseconds since the Unix epoch. Read-path responses render it in a
//! single fixed pattern, `YYYY-MM-DDThh:mm:ss.sssssssssZ`, always UTC and
//! always nine fractional digits.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fixed rendering pattern for envelope timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Seconds and nanoseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TxnTimestamp {
    /// Whole seconds since epoch
    pub seconds: i64,
    /// Sub-second nanoseconds
    pub nanos: u32,
}

impl TxnTimestamp {
    /// Timestamp from parts.
    pub const fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Current wall-clock time.
    ///
    /// A clock before the epoch yields the epoch.
    pub fn now() -> Self {
        let d = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            seconds: d.as_secs() as i64,
            nanos: d.subsec_nanos(),
        }
    }

    /// As a chrono UTC datetime. Out-of-range values collapse to the epoch.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.seconds, self.nanos)
            .single()
            .unwrap_or_default()
    }

    /// Render with [`TIMESTAMP_FORMAT`].
    pub fn render(&self) -> String {
        self.to_datetime().format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for TxnTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
