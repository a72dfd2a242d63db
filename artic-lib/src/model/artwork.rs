//! Artwork record

use serde::Deserialize;
use serde::Serialize;

/// A single artwork record from the Art Institute of Chicago collection.
///
/// Identity is the numeric `id`, which the API guarantees unique across the
/// collection; everything else is display data and may be null for any given
/// record. Selection and equality checks throughout the library key on `id`.
///
/// # Example
///
/// ```
/// use artic_lib::model::Artwork;
///
/// let artwork = Artwork {
///     id: 129884,
///     title: "Starry Night and the Astronauts".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(artwork.id, 129884);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique identifier of the artwork.
    pub id: u64,

    /// Title of the artwork.
    #[serde(default)]
    pub title: String,

    /// Where the artwork originates from.
    #[serde(default)]
    pub place_of_origin: Option<String>,

    /// Artist attribution as the museum displays it.
    #[serde(default)]
    pub artist_display: Option<String>,

    /// Inscriptions on the physical piece, if any.
    #[serde(default)]
    pub inscriptions: Option<String>,

    /// Year the work was begun.
    #[serde(default)]
    pub date_start: Option<i32>,

    /// Year the work was completed.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// The field projection requested from the list API by default.
    ///
    /// Matches the columns the artwork table displays; requesting only these
    /// keeps list responses small.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "place_of_origin",
        "artist_display",
        "inscriptions",
        "date_start",
        "date_end",
    ];
}
