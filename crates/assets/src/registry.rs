use assetdesk_core::{
    AssetId, DomainError, DomainResult, EntityCollection, MaintenanceRecordId,
};

use crate::asset::{Asset, AssetDetails, MaintenanceDraft, MaintenanceRecord};

/// Owner of the asset collection.
///
/// Assets are listed in insertion order. Ids are minted here and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: EntityCollection<Asset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new asset under a fresh id and return the stored value.
    ///
    /// Field contents are taken as given; presence checks belong to the form.
    pub fn create(&mut self, details: AssetDetails) -> Asset {
        let id = self.assets.fresh_id(AssetId::new);
        let asset = Asset::new(id, details);
        self.assets.push(asset.clone());

        tracing::debug!(asset_id = %id, code = %asset.details().code, "asset created");
        asset
    }

    /// Replace the stored asset with the same id.
    ///
    /// Returns `DomainError::NotFound` (and changes nothing) when no asset
    /// carries that id.
    pub fn update(&mut self, asset: Asset) -> DomainResult<Asset> {
        let id = asset.id_typed();
        match self.assets.replace(asset.clone()) {
            Ok(_) => {
                tracing::debug!(asset_id = %id, "asset updated");
                Ok(asset)
            }
            Err(_) => {
                tracing::warn!(asset_id = %id, "update for unknown asset");
                Err(DomainError::not_found())
            }
        }
    }

    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.get(id)
    }

    pub fn list(&self) -> &[Asset] {
        self.assets.as_slice()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First asset (in insertion order) whose code matches exactly.
    pub fn find_by_code(&self, code: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.details().code == code)
    }

    /// Append a maintenance entry to an asset's history.
    pub fn add_maintenance(
        &mut self,
        id: &AssetId,
        draft: MaintenanceDraft,
    ) -> DomainResult<MaintenanceRecord> {
        let asset = self.assets.get_mut(id).ok_or_else(DomainError::not_found)?;

        let history = &mut asset.details_mut().maintenance_history;
        let record_id = loop {
            let candidate = MaintenanceRecordId::new();
            if history.iter().all(|r| r.id() != candidate) {
                break candidate;
            }
        };
        let record = MaintenanceRecord::new(record_id, draft);
        history.push(record.clone());

        tracing::debug!(asset_id = %id, maintenance_id = %record_id, "maintenance recorded");
        Ok(record)
    }
}
