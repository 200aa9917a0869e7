use serde::{Deserialize, Serialize};

use assetdesk_core::DomainResult;
use assetdesk_journal::{NewDisposal, NewMovement};

use crate::fields::{label_or_default, required, required_amount, required_date};

/// Movement entry form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementForm {
    pub asset_id: String,
    pub movement_date: String,
    pub from_location: String,
    pub to_location: String,
    pub from_user: String,
    pub to_user: String,
    pub reason: String,
    pub approved_by: String,
}

impl MovementForm {
    pub fn into_draft(self) -> DomainResult<NewMovement> {
        Ok(NewMovement {
            asset_id: required("asset_id", &self.asset_id)?,
            movement_date: required_date("movement_date", &self.movement_date)?,
            from_location: required("from_location", &self.from_location)?,
            to_location: required("to_location", &self.to_location)?,
            from_user: required("from_user", &self.from_user)?,
            to_user: required("to_user", &self.to_user)?,
            reason: required("reason", &self.reason)?,
            approved_by: required("approved_by", &self.approved_by)?,
        })
    }
}

/// Disposal entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisposalForm {
    pub asset_id: String,
    pub disposal_date: String,
    /// Blank means the form default, `Sale`.
    pub disposal_method: String,
    pub disposal_value: String,
    pub reason: String,
    pub approved_by: String,
}

impl DisposalForm {
    pub fn into_draft(self) -> DomainResult<NewDisposal> {
        Ok(NewDisposal {
            asset_id: required("asset_id", &self.asset_id)?,
            disposal_date: required_date("disposal_date", &self.disposal_date)?,
            disposal_method: label_or_default(&self.disposal_method)?,
            disposal_value: required_amount("disposal_value", &self.disposal_value)?,
            reason: required("reason", &self.reason)?,
            approved_by: required("approved_by", &self.approved_by)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::DomainError;
    use assetdesk_journal::{DisposalLog, DisposalMethod, MovementLog};

    fn movement_form() -> MovementForm {
        MovementForm {
            asset_id: "1".to_string(),
            movement_date: "2023-01-20".to_string(),
            from_location: "Storage Room".to_string(),
            to_location: "Office Floor 2".to_string(),
            from_user: "Admin".to_string(),
            to_user: "John Doe".to_string(),
            reason: "Initial assignment".to_string(),
            approved_by: "Manager".to_string(),
        }
    }

    #[test]
    fn movement_form_appends_to_log() {
        let mut log = MovementLog::new();
        let recorded = log.append(movement_form().into_draft().unwrap());

        assert_eq!(recorded.to_user, "John Doe");
        assert_eq!(recorded.movement_date.to_string(), "2023-01-20");
    }

    #[test]
    fn movement_form_requires_every_field() {
        let mut form = movement_form();
        form.approved_by = String::new();
        assert_eq!(form.into_draft(), Err(DomainError::MissingField("approved_by")));

        let mut form = movement_form();
        form.from_user = " ".to_string();
        assert_eq!(form.into_draft(), Err(DomainError::MissingField("from_user")));
    }

    #[test]
    fn disposal_form_matches_recycling_scenario() {
        let form = DisposalForm {
            asset_id: "OLD-LAPTOP-001".to_string(),
            disposal_date: "2023-03-15".to_string(),
            disposal_method: "Recycling".to_string(),
            disposal_value: "0".to_string(),
            reason: "End of life cycle".to_string(),
            approved_by: "IT Manager".to_string(),
        };

        let mut log = DisposalLog::new();
        let recorded = log.append(form.into_draft().unwrap());
        assert_eq!(recorded.disposal_method, DisposalMethod::Recycling);
        assert_eq!(recorded.disposal_value, 0.0);
    }

    #[test]
    fn disposal_form_defaults_method_and_coerces_value() {
        let form = DisposalForm {
            asset_id: "OLD-DESK-004".to_string(),
            disposal_date: "2023-04-01".to_string(),
            disposal_method: String::new(),
            disposal_value: "n/a".to_string(),
            reason: "Broken".to_string(),
            approved_by: "Facilities".to_string(),
        };

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.disposal_method, DisposalMethod::Sale);
        assert_eq!(draft.disposal_value, 0.0);
    }
}
