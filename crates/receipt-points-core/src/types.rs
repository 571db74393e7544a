//! Strong type definitions for Receipt Points.
//!
//! Identifiers are newtypes to prevent mixing them up with other strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A score in whole points. Never negative.
pub type Points = u64;

/// Opaque identifier a score is stored under.
///
/// The core never interprets the contents. Fresh identifiers come from an
/// external generator (UUIDs in the service).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the identifier text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReceiptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_id_display() {
        let id = ReceiptId::new("7335f748-ec9d-417b-a335-36ce7a17290f");
        assert_eq!(id.to_string(), "7335f748-ec9d-417b-a335-36ce7a17290f");
    }

    #[test]
    fn test_receipt_id_debug() {
        let id = ReceiptId::from("abc");
        assert_eq!(format!("{:?}", id), "ReceiptId(abc)");
    }

    #[test]
    fn test_receipt_id_serializes_as_plain_string() {
        let id = ReceiptId::from("e07db9ff");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"e07db9ff\"");

        let back: ReceiptId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
