use thiserror::Error;

/// Precondition failures found while reading flavor records off the page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractError {
    /// The flavor at `position` (zero-based, document order) lacks `part`.
    #[error("Flavor #{position} is missing its {part}")]
    MissingPart { position: usize, part: &'static str },

    #[error("Flavor '{name}' has a malformed {field}: '{text}'")]
    MalformedRecord {
        name: String,
        field: &'static str,
        text: String,
    },

    /// Names are the lookup key and must be unique.
    #[error("Flavor name '{0}' appears more than once")]
    DuplicateName(String),

    #[error(transparent)]
    Document(#[from] crate::dom::DocumentError),
}
