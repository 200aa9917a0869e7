//! Append-only journals of asset movements and disposals.
//!
//! Records reference assets by free-text id and are never checked against the
//! asset registry. There is no update or delete.

pub mod disposal;
pub mod journal;
pub mod movement;
pub mod record;

pub use disposal::{AssetDisposal, DisposalLog, DisposalMethod, NewDisposal};
pub use journal::Journal;
pub use movement::{AssetMovement, MovementLog, NewMovement};
pub use record::JournalRecord;
