// Request filters
//
// The inventory resource accepts `?param=value` query expressions.
// Filters are per-call values, never client state, so concurrent calls on
// one client cannot observe each other's filters.

use std::fmt;

/// A query expression appended verbatim to the resource URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFilter(String);

impl RequestFilter {
    /// Single-parameter filter: `?param=value`.
    pub fn new(param: &str, value: &str) -> Self {
        Self(format!("?{param}={value}"))
    }

    /// Append another parameter: `...&param=value`.
    pub fn and(mut self, param: &str, value: &str) -> Self {
        self.0.push_str(&format!("&{param}={value}"));
        self
    }

    /// Use a pre-formed expression as-is, for queries this crate doesn't
    /// wrap. The string should start with `?`.
    pub fn raw(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RequestFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
