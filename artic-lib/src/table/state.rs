//! Pagination and selection state types.

use std::collections::HashSet;

use crate::model::Artwork;

use super::DEFAULT_PAGE_SIZE;

/// Pagination counters for the table.
///
/// Invariants: `current_page ≥ 1` and `page_size ≥ 1`, enforced on every
/// mutation. `total_records` is the remote collection's last reported size,
/// not anything client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_records: u64,
}

impl PaginationState {
    /// Creates state at page 1 with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_records: 0,
        }
    }

    /// Returns the 1-based current page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the remote collection's last reported size.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Returns the number of pages the remote collection spans.
    pub fn page_count(&self) -> u64 {
        self.total_records.div_ceil(u64::from(self.page_size))
    }

    /// Returns `true` if a page follows the current one.
    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) < self.page_count()
    }

    /// Returns `true` if a page precedes the current one.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Records a completed fetch.
    pub(crate) fn set_loaded(&mut self, page: u32, page_size: u32, total_records: u64) {
        self.current_page = page.max(1);
        self.page_size = page_size.max(1);
        self.total_records = total_records;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The set of currently selected artworks.
///
/// Ordered, unique by artwork id. Size is unrelated to the page size: a
/// cross-page select can hold many pages' worth of rows.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    items: Vec<Artwork>,
    ids: HashSet<u64>,
}

impl SelectionState {
    /// Creates a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected artworks in selection order.
    pub fn items(&self) -> &[Artwork] {
        &self.items
    }

    /// Checks if an artwork id is selected.
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the number of selected artworks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Toggles one artwork in or out of the selection.
    ///
    /// Returns `true` if the artwork is selected afterwards.
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.ids.remove(&artwork.id) {
            self.items.retain(|a| a.id != artwork.id);
            false
        } else {
            self.ids.insert(artwork.id);
            self.items.push(artwork.clone());
            true
        }
    }

    /// Replaces the selection wholesale.
    ///
    /// Duplicate ids keep their first occurrence; order is preserved.
    pub fn replace(&mut self, items: Vec<Artwork>) {
        self.items.clear();
        self.ids.clear();
        for artwork in items {
            if self.ids.insert(artwork.id) {
                self.items.push(artwork);
            }
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: u64) -> Artwork {
        Artwork {
            id,
            title: format!("Artwork {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_pagination_invariants() {
        let state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.current_page(), 1);

        let mut state = PaginationState::new(10);
        state.set_loaded(0, 0, 25);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.total_records(), 25);
    }

    #[test]
    fn test_page_count() {
        let mut state = PaginationState::new(10);
        state.set_loaded(1, 10, 25);
        assert_eq!(state.page_count(), 3);
        assert!(state.has_next());
        assert!(!state.has_prev());

        state.set_loaded(3, 10, 25);
        assert!(!state.has_next());
        assert!(state.has_prev());
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle(&artwork(7)));
        assert!(selection.contains(7));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle(&artwork(7)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_replace_dedupes_preserving_order() {
        let mut selection = SelectionState::new();
        selection.toggle(&artwork(99));

        selection.replace(vec![artwork(3), artwork(1), artwork(3), artwork(2)]);
        let ids: Vec<u64> = selection.items().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(!selection.contains(99));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionState::new();
        selection.replace(vec![artwork(1), artwork(2)]);
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains(1));
    }
}
