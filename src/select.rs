// src/select.rs
use crate::errors::{DemoError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Selection options with a per-field default: `start=0`, `end=-1`,
/// `step=1`. Each field defaults independently, so a mapping supplying
/// only `step` still gets the documented `start` and `end`.
///
/// `#[serde(default)]` makes every field optional in the JSON form;
/// in-code partial literals use struct update against `Default`:
///
/// ```
/// use defaults_and_capture::select::SelectOptions;
/// let opts = SelectOptions { step: 3, ..Default::default() };
/// assert_eq!((opts.start, opts.end, opts.step), (0, -1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            start: 0,
            end: -1,
            step: 1,
        }
    }
}

impl SelectOptions {
    /// Parse an options mapping from a JSON string, e.g. `{"step":3}`.
    /// Absent fields take their defaults; supplied fields are used
    /// verbatim.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| DemoError::Parse(e.to_string()))
    }
}

/// Resolve an optional options record. `None` is equivalent to the empty
/// mapping: every field comes out at its default. Pure; resolving the
/// same input twice yields identical results.
pub fn resolve(opts: Option<SelectOptions>) -> SelectOptions {
    let resolved = opts.unwrap_or_default();
    debug!(
        start = resolved.start,
        end = resolved.end,
        step = resolved.step,
        "resolved selection options"
    );
    resolved
}
