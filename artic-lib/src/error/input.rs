//! InputError for user-supplied values

/// Error type for parsing the user-supplied row count.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    /// The value could not be parsed as a number.
    #[error("'{value}' is not a number")]
    NotANumber {
        /// The raw input as entered.
        value: String,
    },

    /// The value parsed but is zero or negative.
    #[error("Row count must be positive, got {value}")]
    NotPositive {
        /// The parsed value.
        value: i64,
    },
}

impl InputError {
    /// Creates a new not-a-number error.
    pub fn not_a_number(value: impl Into<String>) -> Self {
        Self::NotANumber {
            value: value.into(),
        }
    }

    /// Creates a new not-positive error.
    pub fn not_positive(value: i64) -> Self {
        Self::NotPositive { value }
    }
}
