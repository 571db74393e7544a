//! Receipt: a submitted purchase, scored once and then discarded.
//!
//! [`Receipt`] mirrors the JSON document clients submit: every field is text.
//! [`ValidatedReceipt`] is what the rules operate on, with each field parsed
//! into a calendar date, a time of day, or an exact decimal.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line entry on a receipt, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free text. May carry leading or trailing whitespace.
    pub short_description: String,
    /// Non-negative decimal amount, e.g. `"6.49"` or `"2"`.
    pub price: String,
}

/// A purchase receipt, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`.
    pub purchase_date: String,
    /// `HH:MM`, 24-hour.
    pub purchase_time: String,
    pub items: Vec<Item>,
    /// Decimal amount with two fractional digits, e.g. `"35.35"`.
    pub total: String,
}

impl Receipt {
    /// Start building a receipt for the given retailer.
    pub fn builder(retailer: impl Into<String>) -> ReceiptBuilder {
        ReceiptBuilder::new(retailer)
    }
}

/// An item whose price has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    pub short_description: String,
    pub price: Decimal,
}

/// A receipt whose date, time and amounts have been parsed.
///
/// Produced by [`validate_receipt`](crate::validation::validate_receipt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem>,
    pub total: Decimal,
}

/// Builder for creating receipts in code (tests, fixtures, examples).
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Vec<Item>,
    total: String,
}

impl ReceiptBuilder {
    /// Start building a receipt.
    pub fn new(retailer: impl Into<String>) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "12:00".to_string(),
            items: Vec::new(),
            total: "0.00".to_string(),
        }
    }

    /// Set the purchase date and time.
    pub fn purchased_at(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.purchase_date = date.into();
        self.purchase_time = time.into();
        self
    }

    /// Set the purchase date.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.purchase_date = date.into();
        self
    }

    /// Set the purchase time.
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.purchase_time = time.into();
        self
    }

    /// Append an item.
    pub fn item(mut self, short_description: impl Into<String>, price: impl Into<String>) -> Self {
        self.items.push(Item {
            short_description: short_description.into(),
            price: price.into(),
        });
        self
    }

    /// Set the total.
    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.total = total.into();
        self
    }

    /// Finish the receipt. No validation happens here.
    pub fn build(self) -> Receipt {
        Receipt {
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self.items,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_json_field_names() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_receipt_rejects_missing_field() {
        let json = r#"{"retailer": "Target", "purchaseDate": "2022-01-01"}"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_builder() {
        let receipt = Receipt::builder("Walgreens")
            .purchased_at("2022-01-02", "08:13")
            .item("Pepsi - 12-oz", "1.25")
            .item("Dasani", "1.40")
            .total("2.65")
            .build();

        assert_eq!(receipt.retailer, "Walgreens");
        assert_eq!(receipt.purchase_time, "08:13");
        assert_eq!(receipt.items[1].price, "1.40");
        assert_eq!(receipt.total, "2.65");
    }
}
