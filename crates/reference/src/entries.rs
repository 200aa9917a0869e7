use serde::{Deserialize, Serialize};

use assetdesk_core::{ConditionId, DepartmentId, EmployeeId, Entity};

use crate::registry::ReferenceEntry;

/// Employee that assets can be issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    pub name: String,
    pub email: String,
    /// Department name (free text, not a link).
    pub department: String,
    pub position: String,
    pub active: bool,
}

/// Fields captured when adding an employee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ReferenceEntry for Employee {
    type Draft = NewEmployee;

    const KIND: &'static str = "employee";

    fn mint_id() -> Self::Id {
        EmployeeId::new()
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            department: draft.department,
            position: draft.position,
            active: true,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Department an asset can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    id: DepartmentId,
    pub name: String,
    pub active: bool,
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ReferenceEntry for Department {
    type Draft = String;

    const KIND: &'static str = "department";

    fn mint_id() -> Self::Id {
        DepartmentId::new()
    }

    fn from_draft(id: Self::Id, name: Self::Draft) -> Self {
        Self {
            id,
            name,
            active: true,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Selectable condition label ("New", "Good", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionOption {
    id: ConditionId,
    pub name: String,
    pub active: bool,
}

impl Entity for ConditionOption {
    type Id = ConditionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ReferenceEntry for ConditionOption {
    type Draft = String;

    const KIND: &'static str = "condition";

    fn mint_id() -> Self::Id {
        ConditionId::new()
    }

    fn from_draft(id: Self::Id, name: Self::Draft) -> Self {
        Self {
            id,
            name,
            active: true,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
