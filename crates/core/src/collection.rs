//! Insertion-ordered entity storage shared by registries and journals.

use crate::entity::Entity;

/// Vec-backed, insertion-ordered collection of entities keyed by id.
///
/// Listing never re-sorts. Lookups are linear, which is fine for the
/// hand-entered data volumes this holds.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mint an id that is not yet present, using `mint` as the source.
    pub fn fresh_id(&self, mut mint: impl FnMut() -> T::Id) -> T::Id {
        loop {
            let id = mint();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Append at the end. Callers are expected to have minted the id through
    /// [`EntityCollection::fresh_id`].
    pub fn push(&mut self, item: T) {
        debug_assert!(!self.contains(item.id()), "duplicate entity id");
        self.items.push(item);
    }

    /// Replace the entry carrying the same id, keeping its position.
    ///
    /// Returns the previous value, or hands `item` back when nothing matched.
    pub fn replace(&mut self, item: T) -> Result<T, T> {
        match self.items.iter_mut().find(|slot| slot.id() == item.id()) {
            Some(slot) => Ok(core::mem::replace(slot, item)),
            None => Err(item),
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(idx))
    }
}

impl<'a, T> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
