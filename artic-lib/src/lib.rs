//! Art Institute of Chicago artworks client
//!
//! An async Rust client for the museum's public artworks list API
//! (`https://api.artic.edu`), plus the pagination/selection controller that
//! drives an artwork table: lazy page loading, per-row multi-select, and the
//! cross-page "select the first N rows" accumulation.

pub mod api;
pub mod error;
pub mod model;
pub mod table;

mod client;

pub use client::*;
