use chrono::NaiveDate;

use assetdesk_core::EntityCollection;

use crate::record::JournalRecord;

/// In-memory append-only journal.
///
/// - No update, no delete
/// - Insertion order is the listing order
/// - Asset references are not validated
#[derive(Debug, Clone)]
pub struct Journal<R> {
    records: EntityCollection<R>,
}

impl<R> Default for Journal<R> {
    fn default() -> Self {
        Self {
            records: EntityCollection::default(),
        }
    }
}

impl<R: JournalRecord> Journal<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under a fresh id and return it.
    pub fn append(&mut self, draft: R::Draft) -> R {
        let id = self.records.fresh_id(R::mint_id);
        let record = R::from_draft(id, draft);
        self.records.push(record.clone());

        tracing::debug!(
            record_type = R::RECORD_TYPE,
            record_id = %id,
            asset_id = record.asset_id(),
            "journal record appended"
        );
        record
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.get(id)
    }

    pub fn list(&self) -> &[R] {
        self.records.as_slice()
    }

    /// Records whose asset reference matches exactly, oldest first.
    pub fn for_asset(&self, asset_id: &str) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| r.asset_id() == asset_id)
            .collect()
    }

    /// Records dated within `from..=to`, in journal order.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| (from..=to).contains(&r.occurred_on()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
