//! Deterministic query-string assembly
//!
//! Endpoint methods declare parameters in wire order; rendering preserves
//! that order byte-for-byte, which lets tests match request targets exactly.

use std::fmt::Display;

/// An ordered set of query parameters for one request
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter
    ///
    /// Values render through `Display`, so enumerations contribute their
    /// wire value, never their variant name. Pushing the same name twice
    /// is a programming error.
    pub fn push(&mut self, name: &'static str, value: impl Display) {
        debug_assert!(
            self.pairs.iter().all(|(n, _)| *n != name),
            "duplicate query parameter: {name}"
        );
        self.pairs.push((name, value.to_string()));
    }

    /// Append an optional parameter, rendering nothing when absent
    pub fn push_opt(&mut self, name: &'static str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Render `path?name=value&...`, or the bare path with no parameters
    ///
    /// Values are URL-encoded; an omitted optional leaves no stray separator.
    pub fn render(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded = serde_urlencoded::to_string(&self.pairs)
            .expect("string pairs always urlencode");
        format!("{path}?{encoded}")
    }
}
