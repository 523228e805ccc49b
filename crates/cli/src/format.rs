//! Output formatting for the CLI.

use custody_executor::Error;

/// How command output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Bytes exactly as the registry returned them.
    Raw,
    /// JSON payloads re-indented; anything else printed raw.
    Json,
}

/// Render invocation output bytes.
pub fn format_output(bytes: &[u8], mode: OutputMode) -> String {
    let text = String::from_utf8_lossy(bytes);
    match mode {
        OutputMode::Raw => text.into_owned(),
        OutputMode::Json => serde_json::from_slice::<serde_json::Value>(bytes)
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
            .unwrap_or_else(|| text.into_owned()),
    }
}

/// Render an execution error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "code": err.code(),
            "error": err.to_string(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("(error) {}: {}", err.code(), err),
    }
}
