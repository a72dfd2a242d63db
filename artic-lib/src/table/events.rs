//! Change notifications emitted by the table controller.

/// Events broadcast after controller state mutations.
///
/// Subscribe via [`TableController::subscribe`]; the rendering layer decides
/// how each event maps to a redraw or an overlay toggle.
///
/// [`TableController::subscribe`]: super::TableController::subscribe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A page fetch completed; rows and totals were replaced.
    PageLoaded {
        /// 1-based page that was loaded.
        page: u32,
        /// Page size it was loaded with.
        page_size: u32,
        /// Remote total reported by the fetch.
        total_records: u64,
    },

    /// The selection was replaced wholesale by a select-first-N run.
    SelectionReplaced {
        /// Number of rows now selected.
        count: usize,
    },

    /// A single row was toggled.
    RowToggled {
        /// Artwork id of the toggled row.
        id: u64,
        /// Whether the row is selected afterwards.
        selected: bool,
    },

    /// Select-first-N input could not be parsed; nothing changed.
    InvalidInput,

    /// The select-N overlay was opened.
    OverlayOpened,

    /// The select-N overlay was closed.
    OverlayClosed,
}
