use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent possible demo errors. Options intake from
// JSON is the only fallible operation, so one parse variant covers it.
#[derive(Debug, Error)]
pub enum DemoError {
    // Variant for errors that occur while parsing an options mapping
    #[error("parse error: {0}")]
    Parse(String),
}

// Type alias for results that use `DemoError` as the error type
pub type Result<T> = std::result::Result<T, DemoError>;
