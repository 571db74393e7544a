//! Identifier generation.

use receipt_points_core::ReceiptId;
use uuid::Uuid;

/// Source of fresh receipt identifiers.
///
/// Implementations must not hand out the same identifier twice.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ReceiptId;
}

/// Random (v4) UUIDs in lowercase hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ReceiptId {
        ReceiptId::new(Uuid::new_v4().hyphenated().to_string())
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> ReceiptId + Send + Sync,
{
    fn generate(&self) -> ReceiptId {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_format() {
        let id = UuidGenerator.generate();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();

        assert_eq!(id.as_str().len(), 36);
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn test_uuids_are_distinct() {
        let ids: HashSet<_> = (0..1000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_closure_generator() {
        let fixed = || ReceiptId::new("fixed");
        assert_eq!(fixed.generate(), ReceiptId::new("fixed"));
    }
}
