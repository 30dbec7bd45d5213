//! Identifier normalization for externally supplied record ids.
//!
//! Callers only ever hold the string form of a record id (typically a URL
//! path segment), while the store's primary key may be declared as an
//! integer or an opaque string depending on schema evolution. [`LookupKey`]
//! is the single point where that ambiguity is resolved: integer-shaped
//! strings are classified as [`LookupKey::Numeric`], everything else falls
//! back to [`LookupKey::Opaque`].

use std::fmt::{Display, Formatter};

/// Normalized form of a record identifier used to query the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Identifier matching `^-?\d+$`, parsed as a signed integer.
    Numeric(i64),
    /// Any other identifier, carried verbatim.
    Opaque(String),
}

impl LookupKey {
    /// Classify a raw identifier string.
    ///
    /// Total over all inputs: an integer-shaped string (optional leading
    /// minus, one or more decimal digits, nothing else) becomes `Numeric`;
    /// anything else — including the empty string, a leading `+`, or a
    /// value that overflows `i64` — becomes `Opaque`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<i64>() {
                return Self::Numeric(n);
            }
        }
        Self::Opaque(raw.to_owned())
    }

    /// Whether the key was classified as integer-shaped.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "numeric:{n}"),
            Self::Opaque(s) => write!(f, "opaque:{s}"),
        }
    }
}
