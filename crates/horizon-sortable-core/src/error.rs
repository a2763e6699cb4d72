//! Error types for Horizon Sortable.
//!
//! Sorting itself never fails: malformed cells degrade to the empty-value
//! policy. Errors only surface while building an engine or decoding its
//! configuration, and from the date parser's internal API.

/// Result type alias for Horizon Sortable operations.
pub type Result<T> = std::result::Result<T, SortableError>;

/// The main error type for Horizon Sortable operations.
#[derive(Debug, thiserror::Error)]
pub enum SortableError {
    /// The configured initial sort column does not exist in the model.
    #[error("initial sort column {column} is out of range (model has {column_count} columns)")]
    InitialColumnOutOfRange { column: usize, column_count: usize },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document was malformed or had the wrong shape.
    #[error("failed to parse sort configuration: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        Self::Toml { source }
    }
}

/// Reasons a value failed to parse against a date format template.
///
/// Positions are character offsets into the value string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// The value ended before the template did.
    #[error("value ended at {position} while expecting token '{token}'")]
    InputExhausted { token: String, position: usize },

    /// A numeric token did not find enough digits.
    #[error("expected a number for token '{token}' at {position}")]
    ExpectedNumber { token: String, position: usize },

    /// A numeric field was parsed but lies outside its allowed range.
    #[error("{field} value {value} is out of range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A month or weekday name was not recognised.
    #[error("unrecognised {kind} name at {position}")]
    UnknownName { kind: &'static str, position: usize },

    /// A literal run in the template did not match the value.
    #[error("expected literal '{expected}' at {position}")]
    LiteralMismatch { expected: String, position: usize },

    /// The meridiem token did not find "am" or "pm".
    #[error("expected am/pm at {position}")]
    InvalidMeridiem { position: usize },

    /// Characters remained after the whole template was consumed.
    #[error("unexpected trailing input at {position}")]
    TrailingInput { position: usize },

    /// The fields were individually valid but do not form a real date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The free-form fallback did not recognise the value.
    #[error("'{0}' is not a recognised date")]
    Unrecognised(String),
}
