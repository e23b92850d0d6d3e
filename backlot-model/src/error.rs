use thiserror::Error;

/// Errors produced while interpreting model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A lifecycle status outside the active/disabled pair came off the
    /// wire. The backend owns the enum; anything else is its defect.
    #[error("unknown resource status `{0}`")]
    UnknownStatus(String),

    /// An ad position outside the fixed placement set.
    #[error("unknown ad position `{0}`")]
    UnknownAdPosition(String),

    /// A video-ad type outside the fixed pair.
    #[error("unknown video ad type `{0}`")]
    UnknownVideoAdType(String),

    /// A campaign date that does not match the `DD/MM/YYYY` wire shape.
    #[error("invalid wire date `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
