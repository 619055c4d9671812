use thiserror::Error;

/// Payload validation failures. Every variant maps to 400 Bad Request and its display
/// text is the client-facing message.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// One or more mandatory fields were absent, null or blank.
    ///
    /// Holds the comma separated list of the required fields.
    #[error("All fields ({0}) are required")]
    MissingFields(String),

    #[error("Invalid {0} format (must be a number)")]
    InvalidNumber(String),

    #[error("Invalid {0} format (must be an integer)")]
    InvalidInteger(String),

    #[error("Invalid {0} value (must not be negative)")]
    NegativeValue(String),

    #[error("Invalid {0} format (must be YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid {0} format (must be YYYY-MM-DD HH:MM:SS)")]
    InvalidDateTime(String),

    #[error("Invalid {0} (must be a non-empty string)")]
    EmptyField(String),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Invalid role '{0}' (must be user or admin)")]
    InvalidRole(String),

    #[error("Email already exists")]
    EmailTaken,

    /// Body was not valid JSON or did not match the expected shape.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}
