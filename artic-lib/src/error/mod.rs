//! Error types

mod api;
mod input;

pub use api::*;
pub use input::*;

/// Top-level error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// User-supplied input could not be used.
    #[error(transparent)]
    Input(#[from] InputError),
}
