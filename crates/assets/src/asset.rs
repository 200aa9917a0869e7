use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assetdesk_core::{AssetId, DomainError, Entity, MaintenanceRecordId};

/// Asset category, as offered on the asset form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    #[default]
    #[serde(rename = "IT Equipment")]
    ItEquipment,
    #[serde(rename = "Furniture & Fixtures")]
    FurnitureAndFixtures,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "Small Tools")]
    SmallTools,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::ItEquipment,
        AssetType::FurnitureAndFixtures,
        AssetType::OfficeSupplies,
        AssetType::SmallTools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetType::ItEquipment => "IT Equipment",
            AssetType::FurnitureAndFixtures => "Furniture & Fixtures",
            AssetType::OfficeSupplies => "Office Supplies",
            AssetType::SmallTools => "Small Tools",
        }
    }
}

impl core::fmt::Display for AssetType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("unknown asset type: {s}")))
    }
}

/// Asset status lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
}

impl AssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Inactive => "Inactive",
        }
    }
}

impl core::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(AssetStatus::Active),
            "Inactive" => Ok(AssetStatus::Inactive),
            other => Err(DomainError::validation(format!("unknown asset status: {other}"))),
        }
    }
}

/// One entry in an asset's maintenance history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceRecord {
    id: MaintenanceRecordId,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub technician: String,
}

impl MaintenanceRecord {
    pub(crate) fn new(id: MaintenanceRecordId, draft: MaintenanceDraft) -> Self {
        Self {
            id,
            date: draft.date,
            description: draft.description,
            cost: draft.cost,
            technician: draft.technician,
        }
    }

    pub fn id(&self) -> MaintenanceRecordId {
        self.id
    }
}

/// Maintenance entry before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceDraft {
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub technician: String,
}

/// Everything the registry stores about an asset except its id.
///
/// This is what the create form submits, and what an edit replaces wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDetails {
    // Asset information
    pub name: String,
    pub asset_type: AssetType,
    /// Human-readable code, `name-brand-number` (e.g. `DELL-XPS-001`).
    pub code: String,
    pub device_id: String,
    pub purchase_date: NaiveDate,

    // Condition and status
    pub current_condition: String,
    pub status: AssetStatus,
    pub remarks: String,

    // Purchase
    pub vendor_name: String,
    pub cost: f64,

    // Assignment and location
    pub originally_issued_to: String,
    pub currently_issued_to: String,
    pub department: String,
    pub location: String,
    pub condition_at_assignment: String,
    pub date_of_issue: NaiveDate,

    pub maintenance_history: Vec<MaintenanceRecord>,
}

impl AssetDetails {
    /// Sum of all recorded maintenance costs.
    pub fn maintenance_cost_total(&self) -> f64 {
        self.maintenance_history.iter().map(|r| r.cost).sum()
    }
}

/// A registered asset.
///
/// The id is assigned by [`crate::AssetRegistry`] and cannot be changed
/// afterwards; edits go through [`Asset::details_mut`] and `update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    id: AssetId,
    #[serde(flatten)]
    details: AssetDetails,
}

impl Asset {
    pub(crate) fn new(id: AssetId, details: AssetDetails) -> Self {
        Self { id, details }
    }

    pub fn id_typed(&self) -> AssetId {
        self.id
    }

    pub fn details(&self) -> &AssetDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut AssetDetails {
        &mut self.details
    }

    /// Same asset, new details.
    pub fn with_details(self, details: AssetDetails) -> Self {
        Self { id: self.id, details }
    }

    pub fn into_details(self) -> AssetDetails {
        self.details
    }

    pub fn is_active(&self) -> bool {
        self.details.status == AssetStatus::Active
    }
}

impl Entity for Asset {
    type Id = AssetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
