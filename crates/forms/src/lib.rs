//! Form submissions: raw text in, typed drafts out.
//!
//! Every field arrives as a string, the way an entry form hands it over.
//! Required fields must be non-blank, numbers fall back to zero, dates are
//! `YYYY-MM-DD` and enumerations are matched by their display label.

mod fields;

pub mod asset;
pub mod journal;
pub mod options;
pub mod reference;

pub use asset::{AssetForm, MaintenanceForm};
pub use journal::{DisposalForm, MovementForm};
pub use options::{AssetFormOptions, PickerOption};
pub use reference::{EmployeeForm, NameForm};
