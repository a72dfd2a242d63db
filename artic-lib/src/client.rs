//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;

use crate::error::ApiError;
use crate::error::Error;
use crate::model::Artwork;

/// Default base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Largest page size the API will serve; larger `limit` values are capped
/// server-side.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// The client for the Art Institute of Chicago public Web API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. The API is public and unauthenticated, so a client
/// built with defaults is immediately usable.
///
/// # Example
///
/// ```ignore
/// use artic_lib::ArticClient;
///
/// let client = ArticClient::new();
/// let page = client.list_artworks(1, 10).await?;
/// println!("{} of {} artworks", page.len(), page.total());
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: String,
    api_version: String,
    http_client: Client,
    timeout: Option<Duration>,
    /// Default field projection for list calls; empty means all fields.
    fields: Vec<String>,
}

impl ArticClient {
    /// Creates a client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the API version being used.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Returns the default field projection for list calls.
    pub fn fields(&self) -> &[String] {
        &self.inner.fields
    }

    /// Issues a GET request and maps non-2xx statuses to [`ApiError::Http`].
    ///
    /// This is the low-level request method used by all API operations. One
    /// outbound call per invocation; there are no retries.
    pub(crate) async fn request(&self, url: &str) -> Result<reqwest::Response, Error> {
        let mut request = self
            .inner
            .http_client
            .get(url)
            .headers(self.default_headers());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api(ApiError::Http {
                status,
                message: body,
            }))
        }
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers
    }
}

impl Default for ArticClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ArticClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticClient")
            .field("base_url", &self.inner.base_url)
            .field("api_version", &self.inner.api_version)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`ArticClient`].
///
/// Every field has a default matching the public API, so `build()` is always
/// available.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .timeout(Duration::from_secs(30))
///     .fields(&["id", "title"])
///     .build();
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    api_version: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
    fields: Vec<String>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
            fields: Artwork::FIELDS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Sets the API base URL.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`]. Mostly useful for pointing the
    /// client at a test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the API version to use.
    ///
    /// Defaults to [`DEFAULT_API_VERSION`].
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the default field projection for list calls.
    ///
    /// Defaults to [`Artwork::FIELDS`]. Use [`all_fields`](Self::all_fields)
    /// to request complete records.
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Requests complete records instead of the default projection.
    pub fn all_fields(mut self) -> Self {
        self.fields.clear();
        self
    }

    /// Builds the [`ArticClient`].
    pub fn build(self) -> ArticClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url: self.base_url,
                api_version: self.api_version,
                http_client,
                timeout: self.timeout,
                fields: self.fields,
            }),
        }
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
