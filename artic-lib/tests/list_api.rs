//! Integration tests for the list client against a local mock server.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use futures::StreamExt;
use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use artic_lib::ArticClient;
use artic_lib::error::ApiError;
use artic_lib::error::Error;
use artic_lib::table::ApiSource;
use artic_lib::table::ArtworkSource;

const TOTAL: u32 = 25;

type Handler = Arc<dyn Fn(&Request<Incoming>) -> Response<Full<Bytes>> + Send + Sync>;

/// Binds a loopback HTTP/1 server and serves every connection with
/// `handler` until the test ends.
async fn spawn_server(handler: Handler) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let io = TokioIo::new(stream);
            let handler = handler.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let handler = handler.clone();
                    async move { Ok::<_, Infallible>(handler(&req)) }
                });
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });

    addr
}

async fn client_for(handler: Handler) -> ArticClient {
    let addr = spawn_server(handler).await;
    ArticClient::builder()
        .base_url(format!("http://{}", addr))
        .build()
}

fn parse_query(req: &Request<Incoming>) -> (u32, u32) {
    let mut page = 1;
    let mut limit = 12;
    if let Some(query) = req.uri().query() {
        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some("page"), Some(value)) => page = value.parse().unwrap_or(1),
                (Some("limit"), Some(value)) => limit = value.parse().unwrap_or(12),
                _ => {}
            }
        }
    }
    (page, limit)
}

/// Serves `limit`-sized slices of a collection of `TOTAL` artworks with ids
/// `1..=TOTAL`, in the live API's envelope shape.
fn list_body(page: u32, limit: u32) -> String {
    let start = (page - 1) * limit + 1;
    let end = (page * limit).min(TOTAL);
    let data: Vec<serde_json::Value> = (start..=end)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Artwork {}", id),
                "place_of_origin": "Chicago",
                "artist_display": null,
                "inscriptions": null,
                "date_start": 1900 + (id as i64 % 50),
                "date_end": null,
            })
        })
        .collect();

    serde_json::json!({
        "pagination": { "total": TOTAL },
        "data": data,
    })
    .to_string()
}

fn response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Full::new(body.into()))
        .unwrap()
}

fn collection_handler() -> Handler {
    Arc::new(|req| {
        assert_eq!(req.uri().path(), "/api/v1/artworks");
        let (page, limit) = parse_query(req);
        response(StatusCode::OK, list_body(page, limit))
    })
}

// =============================================================================
// Client layer
// =============================================================================

#[tokio::test]
async fn test_page_length_is_bounded_by_limit() {
    let client = client_for(collection_handler()).await;

    for limit in [1, 7, 10, 25, 100] {
        let page = client.list_artworks(1, limit).await.unwrap();
        assert!(page.len() <= limit as usize, "limit {}", limit);
        assert_eq!(page.total(), u64::from(TOTAL));
        assert_eq!(page.records()[0].id, 1);
    }
}

#[tokio::test]
async fn test_last_page_is_short() {
    let client = client_for(collection_handler()).await;

    let page = client.list_artworks(3, 10).await.unwrap();
    let ids: Vec<u64> = page.records().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![21, 22, 23, 24, 25]);
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let client = client_for(collection_handler()).await;

    let page = client.list_artworks(9, 10).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total(), u64::from(TOTAL));
}

#[tokio::test]
async fn test_non_2xx_is_an_http_error() {
    let handler: Handler =
        Arc::new(|_| response(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
    let client = client_for(handler).await;

    let err = client.list_artworks(1, 10).await.unwrap_err();
    match err {
        Error::Api(ApiError::Http { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let handler: Handler = Arc::new(|_| response(StatusCode::OK, "not json"));
    let client = client_for(handler).await;

    let err = client.list_artworks(1, 10).await.unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Parse { .. })));
}

#[tokio::test]
async fn test_missing_pagination_degrades_to_zero_total() {
    let handler: Handler = Arc::new(|_| {
        response(StatusCode::OK, r#"{ "data": [ { "id": 1 } ] }"#)
    });
    let client = client_for(handler).await;

    let page = client.list_artworks(1, 10).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.total(), 0);
}

// =============================================================================
// Absorbing source layer
// =============================================================================

#[tokio::test]
async fn test_source_absorbs_http_errors() {
    let handler: Handler = Arc::new(|_| response(StatusCode::SERVICE_UNAVAILABLE, ""));
    let client = client_for(handler).await;
    let source = ApiSource::new(client);

    let page = source.fetch_page(2, 10).await;
    assert!(page.is_empty());
    assert_eq!(page.total(), 0);
    assert_eq!(page.page(), 2);
    assert_eq!(page.limit(), 10);
}

#[tokio::test]
async fn test_source_absorbs_transport_errors() {
    // Nothing listens on this client's port once the listener is dropped.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ArticClient::builder()
        .base_url(format!("http://{}", addr))
        .build();
    let source = ApiSource::new(client);

    let page = source.fetch_page(1, 10).await;
    assert!(page.is_empty());
    assert_eq!(page.total(), 0);
}

#[tokio::test]
async fn test_source_passes_successful_pages_through() {
    let client = client_for(collection_handler()).await;
    let source = ApiSource::new(client);

    let page = source.fetch_page(1, 10).await;
    assert_eq!(page.len(), 10);
    assert_eq!(page.total(), u64::from(TOTAL));
}

// =============================================================================
// Page iterator
// =============================================================================

#[tokio::test]
async fn test_pages_iterator_walks_the_collection() {
    let client = client_for(collection_handler()).await;
    let mut pages = client.artworks().page_size(10).into_pages();

    let mut sizes = Vec::new();
    while let Some(page) = pages.next().await {
        sizes.push(page.unwrap().len());
    }
    assert_eq!(sizes, vec![10, 10, 5]);
    assert!(pages.next().await.is_none());
}

#[tokio::test]
async fn test_pages_iterator_stops_on_error() {
    let handler: Handler = Arc::new(|req| {
        let (page, limit) = parse_query(req);
        if page >= 2 {
            response(StatusCode::INTERNAL_SERVER_ERROR, "boom")
        } else {
            response(StatusCode::OK, list_body(page, limit))
        }
    });
    let client = client_for(handler).await;

    let mut pages = client.artworks().page_size(10).into_pages();
    assert!(pages.next().await.unwrap().is_ok());
    assert!(pages.next().await.unwrap().is_err());
    assert!(pages.next().await.is_none());
}

#[tokio::test]
async fn test_pages_stream_yields_every_page() {
    let client = client_for(collection_handler()).await;
    let pages = client.artworks().page_size(10).into_pages();

    let collected: Vec<_> = pages.into_stream().collect().await;
    assert_eq!(collected.len(), 3);
    assert!(collected.iter().all(|p| p.is_ok()));
}
