//! Golden test vectors: receipts with known scores.
//!
//! The first two come from the reference fixtures. The rest pin down rule
//! edges that are easy to get wrong.

use receipt_points_core::{score, Points, Receipt, ReceiptBuilder};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub retailer: &'static str,
    pub purchase_date: &'static str,
    pub purchase_time: &'static str,
    /// `(shortDescription, price)` pairs.
    pub items: &'static [(&'static str, &'static str)],
    pub total: &'static str,
    pub expected_points: Points,
}

impl GoldenVector {
    /// Build the receipt this vector describes.
    pub fn receipt(&self) -> Receipt {
        self.items
            .iter()
            .fold(
                ReceiptBuilder::new(self.retailer).purchased_at(self.purchase_date, self.purchase_time),
                |b, (desc, price)| b.item(*desc, *price),
            )
            .total(self.total)
            .build()
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "target",
            retailer: "Target",
            purchase_date: "2022-01-01",
            purchase_time: "13:01",
            items: &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35",
            expected_points: 28,
        },
        GoldenVector {
            name: "m&m corner market",
            retailer: "M&M Corner Market",
            purchase_date: "2022-03-20",
            purchase_time: "14:33",
            items: &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
            total: "9.00",
            expected_points: 109,
        },
        GoldenVector {
            // 9 + 0 + 5 + 1 (ceil 1.40 * 0.2 = 0.28) + 0 + 0
            name: "walgreens",
            retailer: "Walgreens",
            purchase_date: "2022-01-02",
            purchase_time: "08:13",
            items: &[("Pepsi - 12-oz", "1.25"), ("Dasani", "1.40")],
            total: "2.65",
            expected_points: 15,
        },
        GoldenVector {
            // 6 + 50 + 25 + 0 + 0 + 6 + 10
            name: "afternoon window start",
            retailer: "Target",
            purchase_date: "2022-01-01",
            purchase_time: "14:01",
            items: &[],
            total: "1.00",
            expected_points: 97,
        },
        GoldenVector {
            // 6 + 0 + 0 + 0 + 0 + 0 + 0
            name: "afternoon window end is exclusive of 16:00",
            retailer: "Target",
            purchase_date: "2022-01-02",
            purchase_time: "16:00",
            items: &[],
            total: "1.01",
            expected_points: 6,
        },
        GoldenVector {
            // 0 + 0 + 0 + 0 + 1 + 0 + 0
            name: "blank description still earns the bonus",
            retailer: "---",
            purchase_date: "2022-01-02",
            purchase_time: "09:00",
            items: &[("   ", "0.01")],
            total: "0.01",
            expected_points: 1,
        },
    ]
}

/// Check every vector against the rule engine.
///
/// Returns the names of vectors that scored differently, or failed to score.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .into_iter()
        .filter(|v| score(&v.receipt()).ok() != Some(v.expected_points))
        .map(|v| v.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        let failures = verify_all_vectors();
        assert!(failures.is_empty(), "failing vectors: {:?}", failures);
    }

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
