pub mod errors;
pub mod select;  // defaulted optional configuration record
pub mod capture; // fixed-context capture vs. dynamic dispatch

use errors::Result;
use select::SelectOptions;

/// Convenience: resolve an options mapping given as a JSON string.
/// An empty string stands in for the no-argument call.
pub fn resolve_json(s: &str) -> Result<SelectOptions> {
    if s.trim().is_empty() {
        return Ok(select::resolve(None));
    }
    let opts = SelectOptions::from_json(s)?;
    Ok(select::resolve(Some(opts)))
}

/// Re-export the most-used items for users who call them directly.
pub use capture::{Inner, Outer};
pub use select::resolve;
