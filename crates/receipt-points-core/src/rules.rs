//! The scoring rules.
//!
//! A receipt's score is the sum of seven independent rules:
//!
//! | Rule | Points |
//! |---|---|
//! | [`Rule::RetailerName`] | 1 per alphanumeric character in the retailer name |
//! | [`Rule::RoundTotal`] | 50 if the total has no cents |
//! | [`Rule::QuarterTotal`] | 25 if the total is a multiple of 0.25 |
//! | [`Rule::ItemPairs`] | 5 for every two items |
//! | [`Rule::DescriptionBonus`] | ceil(price × 0.2) per item whose trimmed description length is a multiple of 3 |
//! | [`Rule::OddDay`] | 6 if the day of the purchase date is odd |
//! | [`Rule::AfternoonBonus`] | 10 if purchased between 14:01 and 15:59 inclusive |
//!
//! Every rule contributes a non-negative amount, so order does not matter and
//! the score is never negative. Money stays in exact decimals until the
//! description bonus rounds up to whole points.

use std::fmt;

use chrono::{Datelike, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::ValidationError;
use crate::receipt::{Receipt, ValidatedItem, ValidatedReceipt};
use crate::types::Points;
use crate::validation::validate_receipt;

const ROUND_TOTAL_POINTS: Points = 50;
const QUARTER_TOTAL_POINTS: Points = 25;
const ITEM_PAIR_POINTS: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

/// Identifies one rule of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RetailerName,
    RoundTotal,
    QuarterTotal,
    ItemPairs,
    DescriptionBonus,
    OddDay,
    AfternoonBonus,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundTotal,
        Rule::QuarterTotal,
        Rule::ItemPairs,
        Rule::DescriptionBonus,
        Rule::OddDay,
        Rule::AfternoonBonus,
    ];

    /// Short label for logs.
    pub fn label(self) -> &'static str {
        match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundTotal => "round_total",
            Rule::QuarterTotal => "quarter_total",
            Rule::ItemPairs => "item_pairs",
            Rule::DescriptionBonus => "description_bonus",
            Rule::OddDay => "odd_day",
            Rule::AfternoonBonus => "afternoon_bonus",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points one rule contributed, with a short explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContribution {
    pub rule: Rule,
    pub points: Points,
    pub detail: String,
}

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// The score: sum of all contributions.
    pub fn total(&self) -> Points {
        self.contributions
            .iter()
            .fold(0, |acc, c| acc.saturating_add(c.points))
    }

    /// Points contributed by a single rule.
    pub fn points_for(&self, rule: Rule) -> Points {
        self.contributions
            .iter()
            .filter(|c| c.rule == rule)
            .fold(0, |acc, c| acc.saturating_add(c.points))
    }
}

/// Score a submitted receipt.
///
/// Fails with [`ValidationError`] if any field cannot be parsed.
pub fn score(receipt: &Receipt) -> Result<Points, ValidationError> {
    Ok(score_breakdown(receipt)?.total())
}

/// Score a submitted receipt, keeping each rule's contribution.
pub fn score_breakdown(receipt: &Receipt) -> Result<ScoreBreakdown, ValidationError> {
    let validated = validate_receipt(receipt)?;
    Ok(breakdown_validated(&validated))
}

/// Score a receipt that has already been validated.
pub fn score_validated(receipt: &ValidatedReceipt) -> Points {
    breakdown_validated(receipt).total()
}

fn breakdown_validated(receipt: &ValidatedReceipt) -> ScoreBreakdown {
    let contributions = Rule::ALL
        .iter()
        .map(|&rule| apply_rule(rule, receipt))
        .collect();

    ScoreBreakdown { contributions }
}

fn apply_rule(rule: Rule, receipt: &ValidatedReceipt) -> RuleContribution {
    let (points, detail) = match rule {
        Rule::RetailerName => {
            let count = alphanumeric_count(&receipt.retailer);
            (count, format!("{} alphanumeric characters", count))
        }
        Rule::RoundTotal => {
            let round = receipt.total.fract().is_zero();
            let points = if round { ROUND_TOTAL_POINTS } else { 0 };
            (points, format!("total {} has no cents: {}", receipt.total, round))
        }
        Rule::QuarterTotal => {
            let quarter = is_multiple_of_quarter(receipt.total);
            let points = if quarter { QUARTER_TOTAL_POINTS } else { 0 };
            (points, format!("total {} is a multiple of 0.25: {}", receipt.total, quarter))
        }
        Rule::ItemPairs => {
            let pairs = (receipt.items.len() / 2) as Points;
            (pairs.saturating_mul(ITEM_PAIR_POINTS), format!("{} item pairs", pairs))
        }
        Rule::DescriptionBonus => {
            let (points, matched) = receipt
                .items
                .iter()
                .filter_map(description_bonus)
                .fold((0 as Points, 0usize), |(sum, n), p| (sum.saturating_add(p), n + 1));
            (points, format!("{} items with description length divisible by 3", matched))
        }
        Rule::OddDay => {
            let day = receipt.purchase_date.day();
            let points = if day % 2 == 1 { ODD_DAY_POINTS } else { 0 };
            (points, format!("purchase day {}", day))
        }
        Rule::AfternoonBonus => {
            let hit = in_afternoon_window(receipt.purchase_time);
            let points = if hit { AFTERNOON_POINTS } else { 0 };
            (points, format!("purchased at {}", receipt.purchase_time.format("%H:%M")))
        }
    };

    RuleContribution {
        rule,
        points,
        detail,
    }
}

/// Count characters that are letters or digits, in any script.
///
/// Only general categories L and N count. Combining marks do not, even the
/// vowel signs that Unicode also calls alphabetic.
fn alphanumeric_count(s: &str) -> Points {
    s.chars().filter(|&c| is_letter_or_number(c)).count() as Points
}

fn is_letter_or_number(c: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

fn is_multiple_of_quarter(amount: Decimal) -> bool {
    (amount % Decimal::new(25, 2)).is_zero()
}

/// ceil(price × 0.2) when the trimmed description's UTF-8 length is a
/// multiple of 3.
fn description_bonus(item: &ValidatedItem) -> Option<Points> {
    let len = item.short_description.trim().len();
    if len % 3 != 0 {
        return None;
    }

    let bonus = (item.price * Decimal::new(2, 1)).ceil();
    Some(bonus.to_u64().unwrap_or(Points::MAX))
}

/// 14:01 through 15:59, both ends inclusive.
fn in_afternoon_window(time: NaiveTime) -> bool {
    let hm = (time.hour(), time.minute());
    hm >= (14, 1) && hm <= (15, 59)
}
