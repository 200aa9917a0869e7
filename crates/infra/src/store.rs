//! The entity store: one explicit owner for every in-memory collection.

use serde::Serialize;

use assetdesk_assets::{Asset, AssetRegistry, MaintenanceRecord};
use assetdesk_core::{AssetId, DomainError, DomainResult};
use assetdesk_forms::{AssetForm, AssetFormOptions, DisposalForm, MaintenanceForm, MovementForm};
use assetdesk_journal::{AssetDisposal, AssetMovement, DisposalLog, MovementLog};
use assetdesk_reference::{ConditionOption, Department, Employee, ReferenceDataManager};

use crate::config::AppConfig;

/// Holds assets, journals and reference data for one session.
///
/// Readers borrow it shared; the single writer borrows it mutably. Nothing here
/// is global, and nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    assets: AssetRegistry,
    movements: MovementLog,
    disposals: DisposalLog,
    reference: ReferenceDataManager,
}

/// Borrowed, serializable view of every collection.
#[derive(Debug, Serialize)]
pub struct StoreSnapshot<'a> {
    pub assets: &'a [Asset],
    pub movements: &'a [AssetMovement],
    pub disposals: &'a [AssetDisposal],
    pub employees: &'a [Employee],
    pub departments: &'a [Department],
    pub conditions: &'a [ConditionOption],
}

impl EntityStore {
    /// A store with no records at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding the fixed sample data set.
    pub fn seeded() -> DomainResult<Self> {
        let mut store = Self::empty();
        crate::seed::load_sample_data(&mut store)?;
        Ok(store)
    }

    pub fn from_config(config: &AppConfig) -> DomainResult<Self> {
        if config.seed_sample_data {
            Self::seeded()
        } else {
            Ok(Self::empty())
        }
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }

    pub fn movements(&self) -> &MovementLog {
        &self.movements
    }

    pub fn movements_mut(&mut self) -> &mut MovementLog {
        &mut self.movements
    }

    pub fn disposals(&self) -> &DisposalLog {
        &self.disposals
    }

    pub fn disposals_mut(&mut self) -> &mut DisposalLog {
        &mut self.disposals
    }

    pub fn reference(&self) -> &ReferenceDataManager {
        &self.reference
    }

    pub fn reference_mut(&mut self) -> &mut ReferenceDataManager {
        &mut self.reference
    }

    /// Picker contents for the asset form (active reference data only).
    pub fn asset_form_options(&self) -> AssetFormOptions {
        AssetFormOptions::from_reference(&self.reference)
    }

    /// Create an asset from a submitted form.
    pub fn submit_new_asset(&mut self, form: AssetForm) -> DomainResult<Asset> {
        let details = form.into_details()?;
        Ok(self.assets.create(details))
    }

    /// Apply a submitted edit form to an existing asset.
    pub fn submit_asset_edit(&mut self, id: &AssetId, form: AssetForm) -> DomainResult<Asset> {
        let current = self.assets.get(id).cloned().ok_or_else(DomainError::not_found)?;
        let edited = form.apply_to(current)?;
        self.assets.update(edited)
    }

    pub fn submit_maintenance(
        &mut self,
        id: &AssetId,
        form: MaintenanceForm,
    ) -> DomainResult<MaintenanceRecord> {
        let draft = form.into_draft()?;
        self.assets.add_maintenance(id, draft)
    }

    pub fn submit_movement(&mut self, form: MovementForm) -> DomainResult<AssetMovement> {
        let draft = form.into_draft()?;
        Ok(self.movements.append(draft))
    }

    pub fn submit_disposal(&mut self, form: DisposalForm) -> DomainResult<AssetDisposal> {
        let draft = form.into_draft()?;
        Ok(self.disposals.append(draft))
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            assets: self.assets.list(),
            movements: self.movements.list(),
            disposals: self.disposals.list(),
            employees: self.reference.employees().list(),
            departments: self.reference.departments().list(),
            conditions: self.reference.conditions().list(),
        }
    }
}
