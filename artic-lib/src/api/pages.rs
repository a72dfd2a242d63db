//! Async iterator for list pagination.

use futures::Stream;

use crate::ArticClient;
use crate::error::Error;

use super::page::ArtworkPage;

/// Async iterator that yields pages of the artworks collection.
///
/// Walks `page = 1, 2, …` until the reported total is reached. The first
/// error ends the iteration; use the table controller's absorbing source if
/// failed pages should degrade to empty ones instead.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.artworks().page_size(100).into_pages();
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("fetched {} of {} artworks", page.len(), page.total());
/// }
/// ```
pub struct ArtworkPages<'a> {
    /// Reference to the client for making requests.
    client: &'a ArticClient,
    /// Field projection for every page request.
    fields: Vec<String>,
    /// Page size for every page request.
    page_size: u32,
    /// The next 1-based page number to fetch.
    next_page: u32,
    /// Whether we've exhausted all pages.
    done: bool,
}

impl<'a> ArtworkPages<'a> {
    pub(crate) fn new(client: &'a ArticClient, fields: Vec<String>, page_size: u32) -> Self {
        Self {
            client,
            fields,
            page_size,
            next_page: 1,
            done: false,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<ArtworkPage, Error>> {
        if self.done {
            return None;
        }

        let page = self.next_page;
        match self
            .client
            .list_artworks_fields(page, self.page_size, &self.fields)
            .await
        {
            Ok(fetched) => {
                self.next_page += 1;
                if fetched.is_empty() || !fetched.has_more() {
                    self.done = true;
                }
                Some(Ok(fetched))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// Converts the iterator into a [`Stream`] of pages.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<ArtworkPage, Error>> + 'a {
        async_stream::stream! {
            while let Some(page) = self.next().await {
                yield page;
            }
        }
    }
}
