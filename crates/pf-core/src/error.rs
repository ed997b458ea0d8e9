/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or editing character data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A string did not name one of the eight attribute codes.
    #[error("unknown attribute: \"{0}\"")]
    UnknownAttribute(String),

    /// A stat edit named a field that does not exist on the root stats.
    #[error("unknown stat field: \"{0}\"")]
    UnknownField(String),

    /// A numeric field was given a value that is not an integer.
    #[error("invalid value for {field}: \"{value}\" is not an integer")]
    InvalidNumber {
        /// The field being edited.
        field: String,
        /// The rejected raw input.
        value: String,
    },
}
