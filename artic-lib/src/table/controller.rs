//! Pagination/selection controller for the artwork table.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::error::Error;
use crate::error::InputError;
use crate::model::Artwork;

use super::DEFAULT_PAGE_SIZE;
use super::events::TableEvent;
use super::source::ArtworkSource;
use super::state::PaginationState;
use super::state::SelectionState;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Drives the paginated, multi-select artwork table.
///
/// The controller owns the visible rows, the pagination counters and the
/// selection, and reaches the API only through an [`ArtworkSource`], so
/// fetch failures surface as empty pages rather than errors. Every mutating
/// operation takes `&mut self`: two operations' internals can never
/// interleave, which rules out both overlapping page loads and page
/// navigation during a select-first-N accumulation.
///
/// State changes are broadcast as [`TableEvent`]s for the rendering layer.
///
/// # Example
///
/// ```ignore
/// let source = Arc::new(ApiSource::new(ArticClient::new()));
/// let mut table = TableController::new(source);
///
/// table.load_page(1, 10).await;
/// table.select_first_n("15").await?;
/// assert_eq!(table.selection().len(), 15);
/// ```
pub struct TableController {
    source: Arc<dyn ArtworkSource>,
    rows: Vec<Artwork>,
    pagination: PaginationState,
    selection: SelectionState,
    busy: bool,
    overlay_open: bool,
    events: broadcast::Sender<TableEvent>,
}

impl TableController {
    /// Creates a controller with the default page size.
    pub fn new(source: Arc<dyn ArtworkSource>) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Creates a controller with a specific initial page size.
    pub fn with_page_size(source: Arc<dyn ArtworkSource>, page_size: u32) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            source,
            rows: Vec::new(),
            pagination: PaginationState::new(page_size),
            selection: SelectionState::new(),
            busy: false,
            overlay_open: false,
            events,
        }
    }

    // =========================================================================
    // State exposed to the rendering layer
    // =========================================================================

    /// Returns the rows of the currently loaded page.
    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    /// Returns the pagination counters.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns `true` while a fetch is in flight.
    ///
    /// A UI affordance only: exclusive borrows already prevent operations
    /// from overlapping, so correctness never depends on this flag.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns `true` while the select-N overlay is open.
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Subscribes to state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<TableEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Loads one page and replaces the visible rows and totals wholesale.
    ///
    /// `page` and `page_size` are clamped to 1 at minimum. The empty
    /// fallback a failed fetch produces is applied like any other page, so
    /// failure is visually indistinguishable from an empty collection.
    /// Calling twice with identical arguments and an unchanged remote yields
    /// identical state.
    pub async fn load_page(&mut self, page: u32, page_size: u32) {
        let page = page.max(1);
        let page_size = page_size.max(1);

        self.busy = true;
        let fetched = self.source.fetch_page(page, page_size).await;
        self.busy = false;

        self.pagination.set_loaded(page, page_size, fetched.total());
        self.rows = fetched.into_records();
        self.emit(TableEvent::PageLoaded {
            page,
            page_size,
            total_records: self.pagination.total_records(),
        });
    }

    /// Re-fetches the current page with the current page size.
    pub async fn reload(&mut self) {
        let page = self.pagination.current_page();
        let page_size = self.pagination.page_size();
        self.load_page(page, page_size).await;
    }

    /// Toggles one row in or out of the selection.
    pub fn toggle_row(&mut self, artwork: &Artwork) {
        let selected = self.selection.toggle(artwork);
        self.emit(TableEvent::RowToggled {
            id: artwork.id,
            selected,
        });
    }

    /// Selects the first N artworks of the remote collection.
    ///
    /// Parses `raw_input` as a positive integer; anything else is rejected
    /// before any network call, leaving the selection untouched. Pages are
    /// then fetched sequentially from page 1 at the current page size,
    /// stopping as soon as N rows are accumulated or the reported total
    /// proves the collection exhausted. The accumulator is truncated to
    /// exactly N and replaces the selection wholesale.
    ///
    /// If the remote collection holds fewer than N records, the selection
    /// legitimately ends up shorter. A failed page fetch contributes zero
    /// rows (see [`ArtworkSource`]) and accumulation continues with the
    /// following pages.
    ///
    /// Returns the number of rows selected.
    pub async fn select_first_n(&mut self, raw_input: &str) -> Result<usize, Error> {
        let n = match parse_row_count(raw_input) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("invalid row count {:?}: {}", raw_input, e);
                self.emit(TableEvent::InvalidInput);
                return Err(e.into());
            }
        };

        let page_size = self.pagination.page_size();
        let pages_needed =
            u32::try_from(n.div_ceil(page_size as usize)).unwrap_or(u32::MAX);

        self.busy = true;
        let mut accumulated: Vec<Artwork> = Vec::new();
        for page in 1..=pages_needed {
            let fetched = self.source.fetch_page(page, page_size).await;
            // A zero total is either an empty collection or an absorbed
            // failure; only a positive total can prove exhaustion.
            let exhausted = fetched.total() > 0
                && u64::from(page) * u64::from(page_size) >= fetched.total();

            accumulated.extend(fetched.into_records());
            if accumulated.len() >= n || exhausted {
                break;
            }
        }
        accumulated.truncate(n);
        self.busy = false;

        let count = accumulated.len();
        self.selection.replace(accumulated);
        self.emit(TableEvent::SelectionReplaced { count });
        Ok(count)
    }

    // =========================================================================
    // Overlay intents
    // =========================================================================

    /// Opens the select-N overlay.
    pub fn open_overlay(&mut self) {
        if !self.overlay_open {
            self.overlay_open = true;
            self.emit(TableEvent::OverlayOpened);
        }
    }

    /// Closes the overlay without touching the selection.
    pub fn dismiss_overlay(&mut self) {
        if self.overlay_open {
            self.overlay_open = false;
            self.emit(TableEvent::OverlayClosed);
        }
    }

    /// Runs [`select_first_n`](Self::select_first_n) and closes the overlay.
    ///
    /// Invalid input leaves the overlay open so the user can correct it.
    pub async fn commit_selection(&mut self, raw_input: &str) -> Result<usize, Error> {
        let count = self.select_first_n(raw_input).await?;
        self.dismiss_overlay();
        Ok(count)
    }

    fn emit(&self, event: TableEvent) {
        // Send fails only when no receiver is subscribed.
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for TableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableController")
            .field("pagination", &self.pagination)
            .field("selected", &self.selection.len())
            .field("busy", &self.busy)
            .field("overlay_open", &self.overlay_open)
            .finish()
    }
}

/// Parses the user-supplied row count for select-first-N.
fn parse_row_count(raw: &str) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::not_a_number(trimmed))?;
    if value <= 0 {
        return Err(InputError::not_positive(value));
    }
    Ok(value as usize)
}
