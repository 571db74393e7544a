//! Proptest generators for property-based testing.

use proptest::prelude::*;

use receipt_points_core::{Receipt, ReceiptBuilder};

/// Generate a retailer name, including punctuation and non-ASCII letters.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 &'.éÑ-]{0,40}".prop_map(String::from)
}

/// Generate a valid `YYYY-MM-DD` date.
pub fn purchase_date() -> impl Strategy<Value = String> {
    // Day capped at 28 so every month is valid.
    (1970u32..=2099, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

/// Generate a valid `HH:MM` time.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

/// Generate an amount with exactly two fractional digits.
pub fn amount() -> impl Strategy<Value = String> {
    (0u64..=1_000_000, 0u32..100).prop_map(|(whole, cents)| format!("{}.{:02}", whole, cents))
}

/// Generate an item description, sometimes padded with whitespace.
pub fn short_description() -> impl Strategy<Value = String> {
    ("[ ]{0,3}", "[A-Za-z0-9 -]{0,30}", "[ ]{0,3}")
        .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<(String, String)>,
    pub total: String,
}

impl ReceiptParams {
    /// Build the receipt.
    pub fn to_receipt(&self) -> Receipt {
        self.items
            .iter()
            .fold(
                ReceiptBuilder::new(self.retailer.as_str())
                    .purchased_at(self.purchase_date.as_str(), self.purchase_time.as_str()),
                |b, (desc, price)| b.item(desc.as_str(), price.as_str()),
            )
            .total(self.total.as_str())
            .build()
    }
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            purchase_date(),
            purchase_time(),
            prop::collection::vec((short_description(), amount()), 0..12),
            amount(),
        )
            .prop_map(|(retailer, purchase_date, purchase_time, items, total)| ReceiptParams {
                retailer,
                purchase_date,
                purchase_time,
                items,
                total,
            })
            .boxed()
    }
}

/// Generate a receipt that passes validation.
pub fn valid_receipt() -> impl Strategy<Value = Receipt> {
    any::<ReceiptParams>().prop_map(|p| p.to_receipt())
}
