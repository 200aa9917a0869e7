use chrono::NaiveDate;

use assetdesk_core::Entity;

/// A journal record.
///
/// Records are:
/// - **immutable** once appended (treat them as facts)
/// - keyed by an id the journal assigns
/// - tied to an asset only by a free-text reference
pub trait JournalRecord: Entity + Clone + core::fmt::Debug {
    /// Fields supplied by the caller; everything except the id.
    type Draft;

    /// Stable record type name (e.g. "assets.movement.recorded").
    const RECORD_TYPE: &'static str;

    fn mint_id() -> Self::Id;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Free-text asset reference as entered.
    fn asset_id(&self) -> &str;

    /// Business date of the record.
    fn occurred_on(&self) -> NaiveDate;
}
