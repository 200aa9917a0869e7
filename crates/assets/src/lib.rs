//! Asset domain module: the asset model and the registry that owns it.
//!
//! Pure in-memory domain logic (no IO, no storage). Holder, department and
//! condition fields are plain names copied from reference data, not links.

pub mod asset;
pub mod registry;

pub use asset::{
    Asset, AssetDetails, AssetStatus, AssetType, MaintenanceDraft, MaintenanceRecord,
};
pub use registry::AssetRegistry;
