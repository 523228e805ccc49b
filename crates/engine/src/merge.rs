//! Field Merge Engine
//!
//! Non-empty patch values overwrite, empty values leave the field alone.
//! There is no way to clear a field. The embedded identifier is always
//! re-derived from the ledger key after a merge.

use custody_core::{check_document_len, validate_document, AssetPatch, AssetRecord, DomainField};
use custody_core::{RegistryError, RegistryResult};

/// Apply a general update patch.
///
/// Merges every domain field, the owner, the document and the declared
/// caller. A non-empty document is subject to the document length limit.
pub fn apply_patch(record: &mut AssetRecord, patch: &AssetPatch) -> RegistryResult<()> {
    if !patch.af_doc.is_empty() {
        check_document_len(&patch.af_doc).map_err(RegistryError::validation)?;
    }

    for field in DomainField::ALL {
        overwrite(record.field_mut(field), patch.field(field));
    }
    overwrite(&mut record.owner_id, &patch.owner_id);
    overwrite(&mut record.af_doc, &patch.af_doc);
    overwrite(&mut record.caller, &patch.caller);

    record.sync_identifier();
    Ok(())
}

/// Replace only the document.
///
/// # Errors
///
/// `Validation` if the document is empty or over the limit.
pub fn apply_document(record: &mut AssetRecord, document: &str) -> RegistryResult<()> {
    validate_document(document).map_err(RegistryError::validation)?;
    record.af_doc = document.to_string();
    record.sync_identifier();
    Ok(())
}

fn overwrite(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}
