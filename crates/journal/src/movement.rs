use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assetdesk_core::{Entity, MovementId};

use crate::journal::Journal;
use crate::record::JournalRecord;

/// Journal of asset transfers between locations and custodians.
pub type MovementLog = Journal<AssetMovement>;

/// A recorded transfer of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetMovement {
    id: MovementId,
    pub asset_id: String,
    pub from_location: String,
    pub to_location: String,
    pub from_user: String,
    pub to_user: String,
    pub movement_date: NaiveDate,
    pub reason: String,
    pub approved_by: String,
}

/// Movement fields as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovement {
    pub asset_id: String,
    pub from_location: String,
    pub to_location: String,
    pub from_user: String,
    pub to_user: String,
    pub movement_date: NaiveDate,
    pub reason: String,
    pub approved_by: String,
}

impl AssetMovement {
    /// The submitted fields, without the id.
    pub fn to_draft(&self) -> NewMovement {
        NewMovement {
            asset_id: self.asset_id.clone(),
            from_location: self.from_location.clone(),
            to_location: self.to_location.clone(),
            from_user: self.from_user.clone(),
            to_user: self.to_user.clone(),
            movement_date: self.movement_date,
            reason: self.reason.clone(),
            approved_by: self.approved_by.clone(),
        }
    }
}

impl Entity for AssetMovement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl JournalRecord for AssetMovement {
    type Draft = NewMovement;

    const RECORD_TYPE: &'static str = "assets.movement.recorded";

    fn mint_id() -> Self::Id {
        MovementId::new()
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            asset_id: draft.asset_id,
            from_location: draft.from_location,
            to_location: draft.to_location,
            from_user: draft.from_user,
            to_user: draft.to_user,
            movement_date: draft.movement_date,
            reason: draft.reason,
            approved_by: draft.approved_by,
        }
    }

    fn asset_id(&self) -> &str {
        &self.asset_id
    }

    fn occurred_on(&self) -> NaiveDate {
        self.movement_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn movement(asset_id: &str, day: &str, to_user: &str) -> NewMovement {
        NewMovement {
            asset_id: asset_id.to_string(),
            from_location: "Storage Room".to_string(),
            to_location: "Office Floor 2".to_string(),
            from_user: "Admin".to_string(),
            to_user: to_user.to_string(),
            movement_date: date(day),
            reason: "Initial assignment".to_string(),
            approved_by: "Manager".to_string(),
        }
    }

    #[test]
    fn append_assigns_id_and_keeps_fields() {
        let mut log = MovementLog::new();
        let draft = movement("DELL-XPS-001", "2023-01-20", "John Doe");

        let recorded = log.append(draft.clone());
        assert_eq!(log.len(), 1);
        assert_eq!(recorded.to_draft(), draft);
        assert_eq!(log.get(recorded.id()), Some(&recorded));
    }

    #[test]
    fn asset_reference_is_not_validated() {
        let mut log = MovementLog::new();
        let recorded = log.append(movement("no-such-asset", "2023-01-20", "John Doe"));
        assert_eq!(recorded.asset_id, "no-such-asset");
    }

    #[test]
    fn for_asset_filters_by_exact_reference() {
        let mut log = MovementLog::new();
        log.append(movement("A-1", "2023-01-20", "John Doe"));
        log.append(movement("A-2", "2023-02-15", "Jane Smith"));
        log.append(movement("A-1", "2023-04-01", "Jane Smith"));

        let history: Vec<_> = log.for_asset("A-1").into_iter().map(|m| m.to_user.as_str()).collect();
        assert_eq!(history, vec!["John Doe", "Jane Smith"]);
        assert!(log.for_asset("a-1").is_empty());
    }

    #[test]
    fn between_is_inclusive_on_both_ends() {
        let mut log = MovementLog::new();
        log.append(movement("A-1", "2023-01-20", "John Doe"));
        log.append(movement("A-2", "2023-02-15", "Jane Smith"));
        log.append(movement("A-3", "2023-03-01", "Admin"));

        let hits = log.between(date("2023-01-20"), date("2023-02-15"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].asset_id, "A-2");
    }

    proptest! {
        /// Property: append grows the log by one and never alters prior entries.
        #[test]
        fn append_only_growth(users in prop::collection::vec("[A-Za-z ]{1,20}", 1..30)) {
            let mut log = MovementLog::new();
            for user in &users {
                let before = log.list().to_vec();
                let draft = movement("A-1", "2023-01-20", user);

                let recorded = log.append(draft.clone());

                prop_assert_eq!(log.len(), before.len() + 1);
                prop_assert_eq!(&log.list()[..before.len()], before.as_slice());
                prop_assert_eq!(log.list().last(), Some(&recorded));
                prop_assert_eq!(recorded.to_draft(), draft);
            }
        }
    }
}
