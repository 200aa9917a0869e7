use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assetdesk_core::{DisposalId, DomainError, Entity};

use crate::journal::Journal;
use crate::record::JournalRecord;

/// Journal of asset retirements.
pub type DisposalLog = Journal<AssetDisposal>;

/// How an asset left the organisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisposalMethod {
    #[default]
    Sale,
    Donation,
    Recycling,
    Destruction,
}

impl DisposalMethod {
    pub const ALL: [DisposalMethod; 4] = [
        DisposalMethod::Sale,
        DisposalMethod::Donation,
        DisposalMethod::Recycling,
        DisposalMethod::Destruction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisposalMethod::Sale => "Sale",
            DisposalMethod::Donation => "Donation",
            DisposalMethod::Recycling => "Recycling",
            DisposalMethod::Destruction => "Destruction",
        }
    }
}

impl core::fmt::Display for DisposalMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisposalMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisposalMethod::ALL
            .into_iter()
            .find(|m| m.label() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("unknown disposal method: {s}")))
    }
}

/// A recorded retirement of an asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDisposal {
    id: DisposalId,
    pub asset_id: String,
    pub disposal_date: NaiveDate,
    pub disposal_method: DisposalMethod,
    pub reason: String,
    pub approved_by: String,
    /// Proceeds, may be zero.
    pub disposal_value: f64,
}

/// Disposal fields as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDisposal {
    pub asset_id: String,
    pub disposal_date: NaiveDate,
    pub disposal_method: DisposalMethod,
    pub reason: String,
    pub approved_by: String,
    pub disposal_value: f64,
}

impl AssetDisposal {
    pub fn to_draft(&self) -> NewDisposal {
        NewDisposal {
            asset_id: self.asset_id.clone(),
            disposal_date: self.disposal_date,
            disposal_method: self.disposal_method,
            reason: self.reason.clone(),
            approved_by: self.approved_by.clone(),
            disposal_value: self.disposal_value,
        }
    }
}

impl Entity for AssetDisposal {
    type Id = DisposalId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl JournalRecord for AssetDisposal {
    type Draft = NewDisposal;

    const RECORD_TYPE: &'static str = "assets.disposal.recorded";

    fn mint_id() -> Self::Id {
        DisposalId::new()
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            asset_id: draft.asset_id,
            disposal_date: draft.disposal_date,
            disposal_method: draft.disposal_method,
            reason: draft.reason,
            approved_by: draft.approved_by,
            disposal_value: draft.disposal_value,
        }
    }

    fn asset_id(&self) -> &str {
        &self.asset_id
    }

    fn occurred_on(&self) -> NaiveDate {
        self.disposal_date
    }
}

impl Journal<AssetDisposal> {
    /// Sum of all disposal proceeds.
    pub fn total_value(&self) -> f64 {
        self.list().iter().map(|d| d.disposal_value).sum()
    }

    pub fn by_method(&self, method: DisposalMethod) -> Vec<&AssetDisposal> {
        self.list()
            .iter()
            .filter(|d| d.disposal_method == method)
            .collect()
    }
}
