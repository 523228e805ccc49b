//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `asset` | Init, CreateAsset, UpdateAsset, UpdateDocument |
//! | `query` | ReadAsset, ReadDocument, ReadAllAssets, CheckUniqueness, GetEcert |

pub mod asset;
pub mod query;
