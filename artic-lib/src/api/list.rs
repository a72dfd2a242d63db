//! Artwork list operation and query builder.

use serde::Deserialize;
use url::Url;

use crate::ArticClient;
use crate::MAX_PAGE_LIMIT;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Artwork;

use super::page::ArtworkPage;
use super::pages::ArtworkPages;

impl ArticClient {
    /// Fetches one page of the artworks collection.
    ///
    /// `page` is 1-based; `limit` is the page size. Both must be positive;
    /// the client passes them through unvalidated, matching the API's own
    /// contract. Uses the client's configured field projection.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let page = client.list_artworks(1, 10).await?;
    /// assert!(page.len() <= 10);
    /// ```
    pub async fn list_artworks(&self, page: u32, limit: u32) -> Result<ArtworkPage, Error> {
        let fields: Vec<String> = self.fields().to_vec();
        self.list_artworks_fields(page, limit, &fields).await
    }

    /// Creates a query builder over the artworks collection.
    pub fn artworks(&self) -> ArtworksQuery<'_> {
        ArtworksQuery::new(self)
    }

    pub(crate) async fn list_artworks_fields(
        &self,
        page: u32,
        limit: u32,
        fields: &[String],
    ) -> Result<ArtworkPage, Error> {
        let url = self.list_url(page, limit, fields)?;

        let response = self.request(url.as_str()).await?;
        let body = response.text().await.map_err(ApiError::from)?;

        let envelope: ListResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(format!("Invalid list response: {}", e), body))?;

        let total = envelope.pagination.map(|p| p.total).unwrap_or(0);
        Ok(ArtworkPage::new(envelope.data, total, page, limit))
    }

    fn list_url(&self, page: u32, limit: u32, fields: &[String]) -> Result<Url, Error> {
        let endpoint = format!(
            "{}/api/{}/artworks",
            self.base_url().trim_end_matches('/'),
            self.api_version()
        );

        let mut url = Url::parse(&endpoint)
            .map_err(|_| Error::Api(ApiError::InvalidUrl(endpoint.clone())))?;

        {
            let mut params = url.query_pairs_mut();
            params.append_pair("page", &page.to_string());
            params.append_pair("limit", &limit.to_string());
            if !fields.is_empty() {
                params.append_pair("fields", &fields.join(","));
            }
        }

        Ok(url)
    }
}

// =============================================================================
// Query builder
// =============================================================================

/// Builder for list queries over the artworks collection.
///
/// Use [`ArticClient::artworks`] to create one.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.artworks()
///     .fields(&["id", "title"])
///     .page_size(50)
///     .into_pages();
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for artwork in page.records() {
///         println!("{}", artwork.title);
///     }
/// }
/// ```
pub struct ArtworksQuery<'a> {
    client: &'a ArticClient,
    fields: Vec<String>,
    page_size: u32,
}

impl<'a> ArtworksQuery<'a> {
    pub(crate) fn new(client: &'a ArticClient) -> Self {
        Self {
            client,
            fields: client.fields().to_vec(),
            page_size: MAX_PAGE_LIMIT,
        }
    }

    /// Specifies which fields to request.
    ///
    /// Overrides the client's configured projection for this query.
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Requests complete records instead of a projection.
    pub fn all_fields(mut self) -> Self {
        self.fields.clear();
        self
    }

    /// Sets the page size for pagination.
    ///
    /// Defaults to [`MAX_PAGE_LIMIT`]; values above it are capped to match
    /// what the server would do anyway.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_LIMIT);
        self
    }

    /// Fetches a single page.
    pub async fn fetch(self, page: u32) -> Result<ArtworkPage, Error> {
        self.client
            .list_artworks_fields(page, self.page_size, &self.fields)
            .await
    }

    /// Converts this query into an async iterator over pages.
    pub fn into_pages(self) -> ArtworkPages<'a> {
        ArtworkPages::new(self.client, self.fields, self.page_size)
    }
}

// =============================================================================
// Response envelope
// =============================================================================

/// JSON envelope of the list endpoint: a `data` array plus pagination info.
///
/// A missing `pagination` object degrades to `total = 0`; a missing or
/// malformed `data` array is a parse failure.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<Artwork>,
    pagination: Option<ListPagination>,
}

#[derive(Debug, Deserialize)]
struct ListPagination {
    /// Total record count of the full remote collection.
    total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ArticClient {
        ArticClient::new()
    }

    #[test]
    fn test_list_url() {
        let url = client()
            .list_url(2, 25, &["id".to_string(), "title".to_string()])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=2&limit=25&fields=id%2Ctitle"
        );
    }

    #[test]
    fn test_list_url_without_fields() {
        let url = client().list_url(1, 10, &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=1&limit=10"
        );
    }

    #[test]
    fn test_page_size_is_capped() {
        let client = client();
        let query = client.artworks().page_size(500);
        assert_eq!(query.page_size, MAX_PAGE_LIMIT);

        let query = client.artworks().page_size(0);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn test_envelope_parses_data_and_total() {
        let body = r#"{
            "pagination": { "total": 129104, "limit": 2, "offset": 0, "total_pages": 64552, "current_page": 1 },
            "data": [
                { "id": 1, "title": "First", "place_of_origin": "Chicago" },
                { "id": 2, "title": "Second", "date_start": 1889, "date_end": null }
            ]
        }"#;
        let envelope: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[1].date_start, Some(1889));
        assert_eq!(envelope.data[1].date_end, None);
        assert_eq!(envelope.pagination.unwrap().total, 129104);
    }

    #[test]
    fn test_envelope_tolerates_missing_pagination() {
        let body = r#"{ "data": [] }"#;
        let envelope: ListResponse = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_empty());
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn test_envelope_rejects_missing_data() {
        let body = r#"{ "pagination": { "total": 5 } }"#;
        assert!(serde_json::from_str::<ListResponse>(body).is_err());
    }
}
