use serde::{Deserialize, Serialize};

use assetdesk_core::DomainResult;
use assetdesk_reference::NewEmployee;

use crate::fields::{optional, required};

/// Employee add/edit form. Name and email are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeForm {
    pub fn into_draft(self) -> DomainResult<NewEmployee> {
        Ok(NewEmployee {
            name: required("name", &self.name)?,
            email: required("email", &self.email)?,
            department: optional(&self.department),
            position: optional(&self.position),
        })
    }
}

/// Single-name form used for departments and condition options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameForm {
    pub name: String,
}

impl NameForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn into_draft(self) -> DomainResult<String> {
        required("name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::DomainError;

    #[test]
    fn employee_needs_name_and_email_only() {
        let draft = EmployeeForm {
            name: "Jane Smith".to_string(),
            email: "jane.smith@company.com".to_string(),
            ..EmployeeForm::default()
        }
        .into_draft()
        .unwrap();
        assert_eq!(draft.department, "");

        let missing = EmployeeForm {
            name: "Jane Smith".to_string(),
            ..EmployeeForm::default()
        }
        .into_draft();
        assert_eq!(missing, Err(DomainError::MissingField("email")));
    }

    #[test]
    fn name_form_trims_and_requires() {
        assert_eq!(NameForm::new(" Finance ").into_draft(), Ok("Finance".to_string()));
        assert_eq!(NameForm::new("").into_draft(), Err(DomainError::MissingField("name")));
    }
}
