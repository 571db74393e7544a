//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use receipt_points_core::{Points, Receipt, ReceiptBuilder, ReceiptId};
use receipt_points_store::{MemoryStore, PointsStore};

/// A test fixture with a memory store.
pub struct TestFixture {
    pub store: MemoryStore,
}

impl TestFixture {
    /// Create a new test fixture with an empty store.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Store a batch of records, panicking on any failure.
    pub async fn seed(&self, records: &[(&str, Points)]) {
        for (id, points) in records {
            self.store
                .put(&ReceiptId::new(*id), *points)
                .await
                .unwrap_or_else(|e| panic!("seeding {id}: {e}"));
        }
    }

    /// The reference Target receipt (28 points).
    pub fn target_receipt() -> Receipt {
        ReceiptBuilder::new("Target")
            .purchased_at("2022-01-01", "13:01")
            .item("Mountain Dew 12PK", "6.49")
            .item("Emils Cheese Pizza", "12.25")
            .item("Knorr Creamy Chicken", "1.26")
            .item("Doritos Nacho Cheese", "3.35")
            .item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")
            .total("35.35")
            .build()
    }

    /// The reference M&M Corner Market receipt (109 points).
    pub fn corner_market_receipt() -> Receipt {
        ReceiptBuilder::new("M&M Corner Market")
            .purchased_at("2022-03-20", "14:33")
            .item("Gatorade", "2.25")
            .item("Gatorade", "2.25")
            .item("Gatorade", "2.25")
            .item("Gatorade", "2.25")
            .total("9.00")
            .build()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a receipt as the JSON document a client would submit.
///
/// Panics if the receipt cannot be serialized.
pub fn receipt_json(receipt: &Receipt) -> serde_json::Value {
    serde_json::to_value(receipt).expect("receipt serializes to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::score;

    #[tokio::test]
    async fn test_fixture_seed() {
        let fixture = TestFixture::new();
        fixture.seed(&[("a", 1), ("b", 2)]).await;

        assert_eq!(fixture.store.get(&ReceiptId::new("b")).await.unwrap(), 2);
        assert_eq!(fixture.store.len().await.unwrap(), 2);
    }

    #[test]
    fn test_reference_receipts() {
        assert_eq!(score(&TestFixture::target_receipt()).unwrap(), 28);
        assert_eq!(score(&TestFixture::corner_market_receipt()).unwrap(), 109);
    }

    #[test]
    fn test_receipt_json_uses_wire_names() {
        let json = receipt_json(&TestFixture::corner_market_receipt());

        assert_eq!(json["retailer"], "M&M Corner Market");
        assert_eq!(json["purchaseDate"], "2022-03-20");
        assert_eq!(json["purchaseTime"], "14:33");
        assert_eq!(json["items"][0]["shortDescription"], "Gatorade");
        assert_eq!(json["items"][0]["price"], "2.25");
        assert_eq!(json["total"], "9.00");
    }
}
