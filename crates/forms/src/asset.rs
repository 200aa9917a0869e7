use serde::{Deserialize, Serialize};

use assetdesk_assets::{Asset, AssetDetails, MaintenanceDraft};
use assetdesk_core::DomainResult;

use crate::fields::{
    format_date, label_or_default, optional, required, required_amount, required_date,
};

/// Asset create/edit form, one string per input.
///
/// Pickers (holders, department, conditions) submit the selected name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetForm {
    pub name: String,
    pub asset_type: String,
    pub code: String,
    pub device_id: String,
    pub purchase_date: String,
    pub current_condition: String,
    pub status: String,
    pub remarks: String,
    pub vendor_name: String,
    pub cost: String,
    pub originally_issued_to: String,
    pub currently_issued_to: String,
    pub department: String,
    pub location: String,
    pub condition_at_assignment: String,
    pub date_of_issue: String,
}

impl AssetForm {
    /// Pre-fill an edit form from a stored asset.
    pub fn from_asset(asset: &Asset) -> Self {
        let d = asset.details();
        Self {
            name: d.name.clone(),
            asset_type: d.asset_type.label().to_string(),
            code: d.code.clone(),
            device_id: d.device_id.clone(),
            purchase_date: format_date(d.purchase_date),
            current_condition: d.current_condition.clone(),
            status: d.status.label().to_string(),
            remarks: d.remarks.clone(),
            vendor_name: d.vendor_name.clone(),
            cost: d.cost.to_string(),
            originally_issued_to: d.originally_issued_to.clone(),
            currently_issued_to: d.currently_issued_to.clone(),
            department: d.department.clone(),
            location: d.location.clone(),
            condition_at_assignment: d.condition_at_assignment.clone(),
            date_of_issue: format_date(d.date_of_issue),
        }
    }

    /// Convert into details for a new asset (empty maintenance history).
    ///
    /// The first blank required field, in form order, is reported.
    pub fn into_details(self) -> DomainResult<AssetDetails> {
        Ok(AssetDetails {
            name: required("name", &self.name)?,
            asset_type: label_or_default(&self.asset_type)?,
            code: required("code", &self.code)?,
            device_id: required("device_id", &self.device_id)?,
            purchase_date: required_date("purchase_date", &self.purchase_date)?,
            current_condition: optional(&self.current_condition),
            status: label_or_default(&self.status)?,
            remarks: optional(&self.remarks),
            vendor_name: required("vendor_name", &self.vendor_name)?,
            cost: required_amount("cost", &self.cost)?,
            originally_issued_to: optional(&self.originally_issued_to),
            currently_issued_to: optional(&self.currently_issued_to),
            department: optional(&self.department),
            location: required("location", &self.location)?,
            condition_at_assignment: optional(&self.condition_at_assignment),
            date_of_issue: required_date("date_of_issue", &self.date_of_issue)?,
            maintenance_history: Vec::new(),
        })
    }

    /// Apply an edit to `asset`, keeping its id and maintenance history.
    pub fn apply_to(self, asset: Asset) -> DomainResult<Asset> {
        let mut details = self.into_details()?;
        details.maintenance_history = asset.details().maintenance_history.clone();
        Ok(asset.with_details(details))
    }
}

/// Maintenance entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceForm {
    pub date: String,
    pub description: String,
    pub cost: String,
    pub technician: String,
}

impl MaintenanceForm {
    pub fn into_draft(self) -> DomainResult<MaintenanceDraft> {
        Ok(MaintenanceDraft {
            date: required_date("date", &self.date)?,
            description: required("description", &self.description)?,
            cost: assetdesk_core::coerce_amount(&self.cost),
            technician: optional(&self.technician),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_assets::{AssetRegistry, AssetStatus, AssetType};
    use assetdesk_core::DomainError;

    fn laptop_form() -> AssetForm {
        AssetForm {
            name: "Dell Laptop XPS 13".to_string(),
            asset_type: "IT Equipment".to_string(),
            code: "DELL-XPS-001".to_string(),
            device_id: "XPS13-2023-001".to_string(),
            purchase_date: "2023-01-15".to_string(),
            current_condition: "Excellent".to_string(),
            status: "Active".to_string(),
            remarks: "Assigned to development team".to_string(),
            vendor_name: "Dell Technologies".to_string(),
            cost: "1500".to_string(),
            originally_issued_to: "John Doe".to_string(),
            currently_issued_to: "John Doe".to_string(),
            department: "IT Department".to_string(),
            location: "Office Floor 2".to_string(),
            condition_at_assignment: "New".to_string(),
            date_of_issue: "2023-01-20".to_string(),
        }
    }

    #[test]
    fn complete_form_converts_to_details() {
        let details = laptop_form().into_details().unwrap();
        assert_eq!(details.name, "Dell Laptop XPS 13");
        assert_eq!(details.asset_type, AssetType::ItEquipment);
        assert_eq!(details.status, AssetStatus::Active);
        assert_eq!(details.cost, 1500.0);
        assert!(details.maintenance_history.is_empty());
    }

    #[test]
    fn first_missing_required_field_is_reported() {
        let mut form = laptop_form();
        form.device_id = String::new();
        form.location = "  ".to_string();

        assert_eq!(form.into_details(), Err(DomainError::MissingField("device_id")));
    }

    #[test]
    fn optional_pickers_may_stay_empty() {
        let mut form = laptop_form();
        form.department = String::new();
        form.currently_issued_to = String::new();
        form.condition_at_assignment = String::new();

        let details = form.into_details().unwrap();
        assert_eq!(details.department, "");
    }

    #[test]
    fn non_numeric_cost_becomes_zero() {
        let mut form = laptop_form();
        form.cost = "about 1500".to_string();
        assert_eq!(form.into_details().unwrap().cost, 0.0);
    }

    #[test]
    fn blank_type_and_status_fall_back_to_form_defaults() {
        let mut form = laptop_form();
        form.asset_type = String::new();
        form.status = String::new();

        let details = form.into_details().unwrap();
        assert_eq!(details.asset_type, AssetType::ItEquipment);
        assert_eq!(details.status, AssetStatus::Active);
    }

    #[test]
    fn unknown_type_label_is_rejected() {
        let mut form = laptop_form();
        form.asset_type = "Vehicles".to_string();
        assert!(matches!(form.into_details(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn edit_round_trip_keeps_id_and_history() {
        let mut registry = AssetRegistry::new();
        let asset = registry.create(laptop_form().into_details().unwrap());
        registry
            .add_maintenance(
                &asset.id_typed(),
                MaintenanceForm {
                    date: "2023-06-01".to_string(),
                    description: "Battery swap".to_string(),
                    cost: "80".to_string(),
                    technician: "Dell Support".to_string(),
                }
                .into_draft()
                .unwrap(),
            )
            .unwrap();
        let stored = registry.get(&asset.id_typed()).unwrap().clone();

        let mut form = AssetForm::from_asset(&stored);
        assert_eq!(form, laptop_form());
        form.location = "Office Floor 3".to_string();

        let edited = form.apply_to(stored.clone()).unwrap();
        assert_eq!(edited.id_typed(), stored.id_typed());
        assert_eq!(edited.details().location, "Office Floor 3");
        assert_eq!(edited.details().maintenance_history.len(), 1);

        registry.update(edited.clone()).unwrap();
        assert_eq!(registry.get(&asset.id_typed()), Some(&edited));
    }

    #[test]
    fn maintenance_form_requires_date_and_description() {
        let form = MaintenanceForm {
            date: "2023-06-01".to_string(),
            description: String::new(),
            cost: "10".to_string(),
            technician: String::new(),
        };
        assert_eq!(form.into_draft(), Err(DomainError::MissingField("description")));
    }

    #[test]
    fn deserializes_partial_payload_with_blank_defaults() {
        let form: AssetForm = serde_json::from_str(r#"{"name":"Drill"}"#).unwrap();
        assert_eq!(form.name, "Drill");
        assert_eq!(form.into_details(), Err(DomainError::MissingField("code")));
    }
}
