use serde::Serialize;

use assetdesk_reference::{ReferenceDataManager, ReferenceEntry};

/// One selectable entry: the stored value and what the picker shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

/// Picker contents for the asset form, built from active reference data only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetFormOptions {
    /// Used for both "originally issued to" and "currently issued to".
    pub employees: Vec<PickerOption>,
    pub departments: Vec<PickerOption>,
    /// Used for both current condition and condition at assignment.
    pub conditions: Vec<PickerOption>,
}

impl AssetFormOptions {
    pub fn from_reference(reference: &ReferenceDataManager) -> Self {
        let employees = reference
            .employees()
            .list_active()
            .into_iter()
            .map(|e| PickerOption {
                value: e.name.clone(),
                label: format!("{} - {}", e.name, e.department),
            })
            .collect();

        Self {
            employees,
            departments: names(reference.departments().list_active()),
            conditions: names(reference.conditions().list_active()),
        }
    }
}

fn names<T: ReferenceEntry>(entries: Vec<&T>) -> Vec<PickerOption> {
    entries
        .into_iter()
        .map(|e| PickerOption {
            value: e.name().to_string(),
            label: e.name().to_string(),
        })
        .collect()
}
