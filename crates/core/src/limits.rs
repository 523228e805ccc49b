//! Size limits
//!
//! The attached document is bounded in Unicode code points, not bytes.

use crate::error::ValidationFailure;

/// Maximum document length in Unicode code points.
pub const MAX_DOCUMENT_CHARS: usize = 250_000;

/// Validate document text for a document update.
///
/// Empty text is rejected, as is text longer than [`MAX_DOCUMENT_CHARS`]
/// code points. Exactly `MAX_DOCUMENT_CHARS` is accepted.
pub fn validate_document(text: &str) -> Result<(), ValidationFailure> {
    if text.is_empty() {
        return Err(ValidationFailure::EmptyDocument);
    }
    check_document_len(text)
}

/// Check only the upper bound. Used where empty means "unchanged".
pub fn check_document_len(text: &str) -> Result<(), ValidationFailure> {
    // Counting stops one past the limit; a multi-megabyte payload is never
    // walked in full.
    let chars = text.chars().take(MAX_DOCUMENT_CHARS + 1).count();
    if chars > MAX_DOCUMENT_CHARS {
        return Err(ValidationFailure::DocumentTooLarge {
            chars: text.chars().count(),
            max: MAX_DOCUMENT_CHARS,
        });
    }
    Ok(())
}
