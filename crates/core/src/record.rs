//! Asset record model
//!
//! ## Layout
//!
//! An [`AssetRecord`] carries its identifier twice: `v5c_id` is the ledger
//! key the record is stored under, `asset_id` is the copy embedded for
//! consumers. The two must always agree; writers re-derive `asset_id` from
//! the key and never from caller input.
//!
//! The sixteen [`DomainField`]s start at [`SENTINEL`] and are amended by the
//! current owner through [`AssetPatch`]es. Serialized names follow the
//! external JSON contract (`matnrAf`, `truckPdate`, `v5cID`, ...).

use crate::types::AssetId;
use serde::{Deserialize, Serialize};

/// Placeholder value of every domain field at creation.
pub const SENTINEL: &str = "UNDEFINED";

/// Persisted custody record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Kind of the last business transaction
    pub transaction_type: String,
    /// Current owner; only the owner may amend the record
    pub owner_id: String,
    /// Embedded identifier copy
    #[serde(alias = "assetID")]
    pub asset_id: String,
    /// Material number at the assembly facility
    pub matnr_af: String,
    /// Purchase order toward the dealer/manufacturer
    pub po_dma: String,
    /// Purchase order toward the supplier
    pub po_supp: String,
    /// Dealer delivery date
    pub dma_del_date: String,
    /// Assembly facility delivery date
    pub af_del_date: String,
    /// Truck model
    pub truck_mod: String,
    /// Truck production date
    pub truck_pdate: String,
    /// Chassis number
    pub truck_chnum: String,
    /// Engine number
    pub truck_ennum: String,
    /// Supplier test result
    pub supp_test: String,
    /// Goods receipt at the dealer
    pub gr_dma: String,
    /// Goods receipt at the assembly facility
    pub gr_af: String,
    /// Dealer master data
    pub dma_masdat: String,
    /// Assembly facility test at the dealer
    pub af_dma_test: String,
    /// Dealer delivery certificate
    pub dma_del_cert: String,
    /// Attached document payload
    pub af_doc: String,
    /// Last caller's self-declared identity
    pub caller: String,
    /// Ledger key
    #[serde(rename = "v5cID")]
    pub v5c_id: AssetId,
}

impl AssetRecord {
    /// Fresh record: every domain field, the document and the caller at
    /// [`SENTINEL`], both identifier copies set to `id`.
    pub fn template(id: &AssetId, owner: impl Into<String>) -> Self {
        let undefined = || SENTINEL.to_string();
        Self {
            transaction_type: undefined(),
            owner_id: owner.into(),
            asset_id: id.as_str().to_string(),
            matnr_af: undefined(),
            po_dma: undefined(),
            po_supp: undefined(),
            dma_del_date: undefined(),
            af_del_date: undefined(),
            truck_mod: undefined(),
            truck_pdate: undefined(),
            truck_chnum: undefined(),
            truck_ennum: undefined(),
            supp_test: undefined(),
            gr_dma: undefined(),
            gr_af: undefined(),
            dma_masdat: undefined(),
            af_dma_test: undefined(),
            dma_del_cert: undefined(),
            af_doc: undefined(),
            caller: undefined(),
            v5c_id: id.clone(),
        }
    }

    /// Ledger key of this record.
    pub fn key(&self) -> &AssetId {
        &self.v5c_id
    }

    /// Re-derive the embedded identifier from the ledger key.
    pub fn sync_identifier(&mut self) {
        self.asset_id = self.v5c_id.as_str().to_string();
    }

    /// True when both identifier copies agree.
    pub fn identifier_in_sync(&self) -> bool {
        self.asset_id == self.v5c_id.as_str()
    }

    /// Read a domain field.
    pub fn field(&self, field: DomainField) -> &str {
        match field {
            DomainField::TransactionType => &self.transaction_type,
            DomainField::MatnrAf => &self.matnr_af,
            DomainField::PoDma => &self.po_dma,
            DomainField::PoSupp => &self.po_supp,
            DomainField::DmaDelDate => &self.dma_del_date,
            DomainField::AfDelDate => &self.af_del_date,
            DomainField::TruckMod => &self.truck_mod,
            DomainField::TruckPdate => &self.truck_pdate,
            DomainField::TruckChnum => &self.truck_chnum,
            DomainField::TruckEnnum => &self.truck_ennum,
            DomainField::SuppTest => &self.supp_test,
            DomainField::GrDma => &self.gr_dma,
            DomainField::GrAf => &self.gr_af,
            DomainField::DmaMasdat => &self.dma_masdat,
            DomainField::AfDmaTest => &self.af_dma_test,
            DomainField::DmaDelCert => &self.dma_del_cert,
        }
    }

    /// Mutable access to a domain field.
    pub fn field_mut(&mut self, field: DomainField) -> &mut String {
        match field {
            DomainField::TransactionType => &mut self.transaction_type,
            DomainField::MatnrAf => &mut self.matnr_af,
            DomainField::PoDma => &mut self.po_dma,
            DomainField::PoSupp => &mut self.po_supp,
            DomainField::DmaDelDate => &mut self.dma_del_date,
            DomainField::AfDelDate => &mut self.af_del_date,
            DomainField::TruckMod => &mut self.truck_mod,
            DomainField::TruckPdate => &mut self.truck_pdate,
            DomainField::TruckChnum => &mut self.truck_chnum,
            DomainField::TruckEnnum => &mut self.truck_ennum,
            DomainField::SuppTest => &mut self.supp_test,
            DomainField::GrDma => &mut self.gr_dma,
            DomainField::GrAf => &mut self.gr_af,
            DomainField::DmaMasdat => &mut self.dma_masdat,
            DomainField::AfDmaTest => &mut self.af_dma_test,
            DomainField::DmaDelCert => &mut self.dma_del_cert,
        }
    }
}

/// The amendable business fields of a record.
///
/// Owner, document and caller are amendable too but have their own rules,
/// so they are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainField {
    /// `transactionType`
    TransactionType,
    /// `matnrAf`
    MatnrAf,
    /// `poDma`
    PoDma,
    /// `poSupp`
    PoSupp,
    /// `dmaDelDate`
    DmaDelDate,
    /// `afDelDate`
    AfDelDate,
    /// `truckMod`
    TruckMod,
    /// `truckPdate`
    TruckPdate,
    /// `truckChnum`
    TruckChnum,
    /// `truckEnnum`
    TruckEnnum,
    /// `suppTest`
    SuppTest,
    /// `grDma`
    GrDma,
    /// `grAf`
    GrAf,
    /// `dmaMasdat`
    DmaMasdat,
    /// `afDmaTest`
    AfDmaTest,
    /// `dmaDelCert`
    DmaDelCert,
}

impl DomainField {
    /// Every domain field, in serialization order.
    pub const ALL: [DomainField; 16] = [
        DomainField::TransactionType,
        DomainField::MatnrAf,
        DomainField::PoDma,
        DomainField::PoSupp,
        DomainField::DmaDelDate,
        DomainField::AfDelDate,
        DomainField::TruckMod,
        DomainField::TruckPdate,
        DomainField::TruckChnum,
        DomainField::TruckEnnum,
        DomainField::SuppTest,
        DomainField::GrDma,
        DomainField::GrAf,
        DomainField::DmaMasdat,
        DomainField::AfDmaTest,
        DomainField::DmaDelCert,
    ];

    /// External JSON name.
    pub fn json_name(&self) -> &'static str {
        match self {
            DomainField::TransactionType => "transactionType",
            DomainField::MatnrAf => "matnrAf",
            DomainField::PoDma => "poDma",
            DomainField::PoSupp => "poSupp",
            DomainField::DmaDelDate => "dmaDelDate",
            DomainField::AfDelDate => "afDelDate",
            DomainField::TruckMod => "truckMod",
            DomainField::TruckPdate => "truckPdate",
            DomainField::TruckChnum => "truckChnum",
            DomainField::TruckEnnum => "truckEnnum",
            DomainField::SuppTest => "suppTest",
            DomainField::GrDma => "grDma",
            DomainField::GrAf => "grAf",
            DomainField::DmaMasdat => "dmaMasdat",
            DomainField::AfDmaTest => "afDmaTest",
            DomainField::DmaDelCert => "dmaDelCert",
        }
    }
}

/// Caller-supplied partial update.
///
/// Every field defaults to empty, and empty means "leave unchanged". The
/// identifier is carried only to locate the record; merge never copies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPatch {
    /// `transactionType`
    pub transaction_type: String,
    /// New owner
    pub owner_id: String,
    /// Identifier of the target record
    #[serde(rename = "assetID", alias = "assetId")]
    pub asset_id: String,
    /// `matnrAf`
    pub matnr_af: String,
    /// `poDma`
    pub po_dma: String,
    /// `poSupp`
    pub po_supp: String,
    /// `dmaDelDate`
    pub dma_del_date: String,
    /// `afDelDate`
    pub af_del_date: String,
    /// `truckMod`
    pub truck_mod: String,
    /// `truckPdate`
    pub truck_pdate: String,
    /// `truckChnum`
    pub truck_chnum: String,
    /// `truckEnnum`
    pub truck_ennum: String,
    /// `suppTest`
    pub supp_test: String,
    /// `grDma`
    pub gr_dma: String,
    /// `grAf`
    pub gr_af: String,
    /// `dmaMasdat`
    pub dma_masdat: String,
    /// `afDmaTest`
    pub af_dma_test: String,
    /// `dmaDelCert`
    pub dma_del_cert: String,
    /// Document payload
    pub af_doc: String,
    /// Caller-declared identity, compared against the record owner
    pub caller: String,
}

impl AssetPatch {
    /// Patch addressed at `id`, all fields empty.
    pub fn for_asset(id: impl Into<String>) -> Self {
        Self {
            asset_id: id.into(),
            ..Self::default()
        }
    }

    /// Set the declared caller.
    pub fn declared_by(mut self, caller: impl Into<String>) -> Self {
        self.caller = caller.into();
        self
    }

    /// Set a domain field.
    pub fn with(mut self, field: DomainField, value: impl Into<String>) -> Self {
        *self.field_mut(field) = value.into();
        self
    }

    /// Set the new owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner_id = owner.into();
        self
    }

    /// Set the document payload.
    pub fn with_document(mut self, doc: impl Into<String>) -> Self {
        self.af_doc = doc.into();
        self
    }

    /// Read a domain field of the patch.
    pub fn field(&self, field: DomainField) -> &str {
        match field {
            DomainField::TransactionType => &self.transaction_type,
            DomainField::MatnrAf => &self.matnr_af,
            DomainField::PoDma => &self.po_dma,
            DomainField::PoSupp => &self.po_supp,
            DomainField::DmaDelDate => &self.dma_del_date,
            DomainField::AfDelDate => &self.af_del_date,
            DomainField::TruckMod => &self.truck_mod,
            DomainField::TruckPdate => &self.truck_pdate,
            DomainField::TruckChnum => &self.truck_chnum,
            DomainField::TruckEnnum => &self.truck_ennum,
            DomainField::SuppTest => &self.supp_test,
            DomainField::GrDma => &self.gr_dma,
            DomainField::GrAf => &self.gr_af,
            DomainField::DmaMasdat => &self.dma_masdat,
            DomainField::AfDmaTest => &self.af_dma_test,
            DomainField::DmaDelCert => &self.dma_del_cert,
        }
    }

    fn field_mut(&mut self, field: DomainField) -> &mut String {
        match field {
            DomainField::TransactionType => &mut self.transaction_type,
            DomainField::MatnrAf => &mut self.matnr_af,
            DomainField::PoDma => &mut self.po_dma,
            DomainField::PoSupp => &mut self.po_supp,
            DomainField::DmaDelDate => &mut self.dma_del_date,
            DomainField::AfDelDate => &mut self.af_del_date,
            DomainField::TruckMod => &mut self.truck_mod,
            DomainField::TruckPdate => &mut self.truck_pdate,
            DomainField::TruckChnum => &mut self.truck_chnum,
            DomainField::TruckEnnum => &mut self.truck_ennum,
            DomainField::SuppTest => &mut self.supp_test,
            DomainField::GrDma => &mut self.gr_dma,
            DomainField::GrAf => &mut self.gr_af,
            DomainField::DmaMasdat => &mut self.dma_masdat,
            DomainField::AfDmaTest => &mut self.af_dma_test,
            DomainField::DmaDelCert => &mut self.dma_del_cert,
        }
    }
}
