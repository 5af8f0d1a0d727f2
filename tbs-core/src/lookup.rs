//! Identifier search over any slice of [`Identifiable`] entities.

use crate::types::Identifiable;

/// First element whose identifier equals `id`.
pub fn find_by_id<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id().as_ref() == id)
}

/// Mutable variant of [`find_by_id`].
pub fn find_by_id_mut<'a, T: Identifiable>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id().as_ref() == id)
}

/// Every identifier in `items`, sorted lexicographically.
pub fn list_ids<T: Identifiable>(items: &[T]) -> Vec<T::Id> {
    let mut ids: Vec<T::Id> = items.iter().map(|item| item.id().clone()).collect();
    ids.sort();
    ids
}
