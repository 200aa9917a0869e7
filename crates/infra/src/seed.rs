//! Fixed sample data loaded at startup.
//!
//! Everything goes through the same forms a user would fill in, so the sample
//! set obeys the same required-field rules as live input.

use assetdesk_core::DomainResult;
use assetdesk_forms::{AssetForm, DisposalForm, EmployeeForm, MovementForm, NameForm};

use crate::store::EntityStore;

const DEPARTMENTS: [&str; 4] = [
    "IT Department",
    "HR Department",
    "Sales Department",
    "Finance Department",
];

const CONDITIONS: [&str; 5] = ["New", "Excellent", "Good", "Fair", "Poor"];

/// (name, email, department, position)
const EMPLOYEES: [(&str, &str, &str, &str); 3] = [
    ("John Doe", "john.doe@company.com", "IT Department", "Software Developer"),
    ("Jane Smith", "jane.smith@company.com", "HR Department", "HR Manager"),
    ("Mike Johnson", "mike.johnson@company.com", "Sales Department", "Sales Representative"),
];

pub fn load_sample_data(store: &mut EntityStore) -> DomainResult<()> {
    load_reference_data(store)?;

    let laptop = store.submit_new_asset(AssetForm {
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
    })?;

    let chair = store.submit_new_asset(AssetForm {
        name: "Office Chair Ergonomic".to_string(),
        asset_type: "Furniture & Fixtures".to_string(),
        code: "CHAIR-ERG-002".to_string(),
        device_id: "CHAIR-001".to_string(),
        purchase_date: "2023-02-10".to_string(),
        current_condition: "Good".to_string(),
        status: "Active".to_string(),
        remarks: "Standard office chair".to_string(),
        vendor_name: "Office Furniture Co".to_string(),
        cost: "250".to_string(),
        originally_issued_to: "Jane Smith".to_string(),
        currently_issued_to: "Jane Smith".to_string(),
        department: "HR Department".to_string(),
        location: "Office Floor 1".to_string(),
        condition_at_assignment: "New".to_string(),
        date_of_issue: "2023-02-15".to_string(),
    })?;

    store.submit_movement(MovementForm {
        asset_id: laptop.id_typed().to_string(),
        movement_date: "2023-01-20".to_string(),
        from_location: "Storage Room".to_string(),
        to_location: "Office Floor 2".to_string(),
        from_user: "Admin".to_string(),
        to_user: "John Doe".to_string(),
        reason: "Initial assignment".to_string(),
        approved_by: "Manager".to_string(),
    })?;

    store.submit_movement(MovementForm {
        asset_id: chair.id_typed().to_string(),
        movement_date: "2023-02-15".to_string(),
        from_location: "Storage Room".to_string(),
        to_location: "Office Floor 1".to_string(),
        from_user: "Admin".to_string(),
        to_user: "Jane Smith".to_string(),
        reason: "New employee setup".to_string(),
        approved_by: "Manager".to_string(),
    })?;

    store.submit_disposal(DisposalForm {
        asset_id: "OLD-LAPTOP-001".to_string(),
        disposal_date: "2023-03-15".to_string(),
        disposal_method: "Recycling".to_string(),
        disposal_value: "0".to_string(),
        reason: "End of life cycle".to_string(),
        approved_by: "IT Manager".to_string(),
    })?;

    tracing::info!(
        assets = store.assets().len(),
        movements = store.movements().len(),
        disposals = store.disposals().len(),
        "sample data loaded"
    );
    Ok(())
}

fn load_reference_data(store: &mut EntityStore) -> DomainResult<()> {
    let reference = store.reference_mut();

    for name in DEPARTMENTS {
        reference.departments_mut().add(NameForm::new(name).into_draft()?);
    }
    for name in CONDITIONS {
        reference.conditions_mut().add(NameForm::new(name).into_draft()?);
    }
    for (name, email, department, position) in EMPLOYEES {
        let draft = EmployeeForm {
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            position: position.to_string(),
        }
        .into_draft()?;
        reference.employees_mut().add(draft);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_journal::DisposalMethod;

    #[test]
    fn sample_set_matches_fixture_counts() {
        let store = EntityStore::seeded().unwrap();

        assert_eq!(store.assets().len(), 2);
        assert_eq!(store.movements().len(), 2);
        assert_eq!(store.disposals().len(), 1);
        assert_eq!(store.reference().employees().len(), 3);
        assert_eq!(store.reference().departments().len(), 4);
        assert_eq!(store.reference().conditions().len(), 5);
    }

    #[test]
    fn seeded_movements_point_at_seeded_assets() {
        let store = EntityStore::seeded().unwrap();
        let laptop = store.assets().find_by_code("DELL-XPS-001").unwrap();

        let history = store.movements().for_asset(&laptop.id_typed().to_string());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].to_user, "John Doe");
    }

    #[test]
    fn seeded_disposal_is_free_text_recycling() {
        let store = EntityStore::seeded().unwrap();
        let disposal = &store.disposals().list()[0];

        assert_eq!(disposal.asset_id, "OLD-LAPTOP-001");
        assert_eq!(disposal.disposal_method, DisposalMethod::Recycling);
        assert_eq!(disposal.disposal_value, 0.0);
    }

    #[test]
    fn every_seeded_reference_entry_starts_active() {
        let store = EntityStore::seeded().unwrap();
        let options = store.asset_form_options();

        assert_eq!(options.employees.len(), 3);
        assert_eq!(options.departments.len(), 4);
        assert_eq!(options.conditions.len(), 5);
    }
}
