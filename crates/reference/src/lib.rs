//! Reference data: employees, departments and condition options.
//!
//! These lists feed the pickers on the asset form. Each is an independent
//! registry; the active flag controls whether an entry is offered for
//! selection. Assets that already copied a name are never touched.

pub mod entries;
pub mod manager;
pub mod registry;

pub use entries::{ConditionOption, Department, Employee, NewEmployee};
pub use manager::ReferenceDataManager;
pub use registry::{ReferenceEntry, ReferenceRegistry};
