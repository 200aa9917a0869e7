use assetdesk_core::{DomainError, DomainResult, Entity, EntityCollection};

/// Contract shared by every reference-data entry.
pub trait ReferenceEntry: Entity + Clone {
    /// Fields supplied when adding an entry.
    type Draft;

    /// Short name used in log lines ("employee", "department", ...).
    const KIND: &'static str;

    fn mint_id() -> Self::Id;

    /// Build a new, active entry. Only registries should call this.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Label shown in selection lists.
    fn name(&self) -> &str;

    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}

/// Insertion-ordered registry for one kind of reference data.
#[derive(Debug, Clone)]
pub struct ReferenceRegistry<T> {
    entries: EntityCollection<T>,
}

impl<T> Default for ReferenceRegistry<T> {
    fn default() -> Self {
        Self {
            entries: EntityCollection::default(),
        }
    }
}

impl<T: ReferenceEntry> ReferenceRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under a fresh id. New entries start active.
    pub fn add(&mut self, draft: T::Draft) -> T {
        let id = self.entries.fresh_id(T::mint_id);
        let entry = T::from_draft(id, draft);
        self.entries.push(entry.clone());

        tracing::debug!(kind = T::KIND, id = %id, name = entry.name(), "reference entry added");
        entry
    }

    /// Replace the entry with the same id; `NotFound` leaves the list as is.
    pub fn update(&mut self, entry: T) -> DomainResult<T> {
        let id = *entry.id();
        match self.entries.replace(entry.clone()) {
            Ok(_) => {
                tracing::debug!(kind = T::KIND, id = %id, active = entry.is_active(), "reference entry updated");
                Ok(entry)
            }
            Err(_) => {
                tracing::warn!(kind = T::KIND, id = %id, "update for unknown reference entry");
                Err(DomainError::not_found())
            }
        }
    }

    /// Hard delete. Removing an unknown id is a no-op returning `None`.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.entries.remove(id);
        if removed.is_some() {
            tracing::debug!(kind = T::KIND, id = %id, "reference entry removed");
        }
        removed
    }

    /// Toggle the active flag through `update`.
    pub fn set_active(&mut self, id: &T::Id, active: bool) -> DomainResult<T> {
        let mut entry = self.get(id).cloned().ok_or_else(DomainError::not_found)?;
        entry.set_active(active);
        self.update(entry)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn list(&self) -> &[T] {
        self.entries.as_slice()
    }

    /// Active entries only, in collection order. Feeds the form pickers.
    pub fn list_active(&self) -> Vec<&T> {
        self.entries.iter().filter(|e| e.is_active()).collect()
    }

    /// Names of the active entries, in collection order.
    pub fn active_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_active())
            .map(|e| e.name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
