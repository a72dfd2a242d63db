//! Data access boundary for the table controller.

use async_trait::async_trait;

use crate::ArticClient;
use crate::api::ArtworkPage;

/// Supplies pages of artworks to the table controller.
///
/// Implementations never fail: any underlying error is absorbed into an
/// empty page (records empty, `total` zero) so callers can treat every
/// fetch uniformly. Failures are reported through the `log` side channel
/// only, which makes a failed fetch indistinguishable from an empty
/// collection — a documented limitation, not a defect.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Fetches one page. `page` is 1-based and `limit` must be positive;
    /// implementations tolerate any positive values without panicking.
    async fn fetch_page(&self, page: u32, limit: u32) -> ArtworkPage;
}

/// [`ArtworkSource`] backed by the live list API.
///
/// One outbound request per call; no retries, no caching of prior results.
#[derive(Debug, Clone)]
pub struct ApiSource {
    client: ArticClient,
}

impl ApiSource {
    /// Creates a source over the given client.
    pub fn new(client: ArticClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtworkSource for ApiSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> ArtworkPage {
        match self.client.list_artworks(page, limit).await {
            Ok(fetched) => fetched,
            Err(e) => {
                log::warn!("artwork list fetch failed for page {}: {}", page, e);
                ArtworkPage::empty(page, limit)
            }
        }
    }
}
