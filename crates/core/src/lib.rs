//! `assetdesk-core`: shared building blocks for the asset desk.
//!
//! Typed identifiers, the entity contract every collection relies on, the
//! domain error model and numeric input coercion. No IO, no storage.

pub mod amount;
pub mod collection;
pub mod entity;
pub mod error;
pub mod id;

pub use amount::coerce_amount;
pub use collection::EntityCollection;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    AssetId, ConditionId, DepartmentId, DisposalId, EmployeeId, MaintenanceRecordId, MovementId,
};
