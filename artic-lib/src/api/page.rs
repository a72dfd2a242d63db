//! Page type for paginated list results.

use crate::model::Artwork;

/// One fetched batch of artworks plus pagination information.
///
/// `total` is the size of the full remote collection as the API reported it
/// for this fetch, not the number of records in this page.
///
/// # Example
///
/// ```ignore
/// let page = client.list_artworks(1, 10).await?;
///
/// for artwork in page.records() {
///     println!("{}", artwork.title);
/// }
///
/// if page.has_more() {
///     println!("{} more pages available", page.total() / 10);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkPage {
    records: Vec<Artwork>,
    /// Total record count of the remote collection.
    total: u64,
    /// 1-based page number this batch was fetched as.
    page: u32,
    /// Page size the batch was fetched with.
    limit: u32,
}

impl ArtworkPage {
    /// Creates a new page.
    pub fn new(records: Vec<Artwork>, total: u64, page: u32, limit: u32) -> Self {
        Self {
            records,
            total,
            page,
            limit,
        }
    }

    /// Creates an empty page with `total` zero.
    ///
    /// This is the uniform fallback shape for failed fetches.
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            page,
            limit,
        }
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// Returns the total record count of the remote collection.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size this batch was fetched with.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if pages beyond this one exist in the remote
    /// collection.
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more() {
        let page = ArtworkPage::new(Vec::new(), 25, 2, 10);
        assert!(page.has_more());

        let last = ArtworkPage::new(Vec::new(), 25, 3, 10);
        assert!(!last.has_more());
    }

    #[test]
    fn test_empty_fallback_shape() {
        let page = ArtworkPage::empty(4, 10);
        assert!(page.is_empty());
        assert_eq!(page.total(), 0);
        assert_eq!(page.page(), 4);
        assert_eq!(page.limit(), 10);
        assert!(!page.has_more());
    }
}
