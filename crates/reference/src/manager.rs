use crate::entries::{ConditionOption, Department, Employee};
use crate::registry::ReferenceRegistry;

/// Owner of the three reference-data registries.
///
/// The registries are independent of each other: removing a department does not
/// touch employees that name it.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataManager {
    employees: ReferenceRegistry<Employee>,
    departments: ReferenceRegistry<Department>,
    conditions: ReferenceRegistry<ConditionOption>,
}

impl ReferenceDataManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &ReferenceRegistry<Employee> {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut ReferenceRegistry<Employee> {
        &mut self.employees
    }

    pub fn departments(&self) -> &ReferenceRegistry<Department> {
        &self.departments
    }

    pub fn departments_mut(&mut self) -> &mut ReferenceRegistry<Department> {
        &mut self.departments
    }

    pub fn conditions(&self) -> &ReferenceRegistry<ConditionOption> {
        &self.conditions
    }

    pub fn conditions_mut(&mut self) -> &mut ReferenceRegistry<ConditionOption> {
        &mut self.conditions
    }
}
