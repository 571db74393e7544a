//! Receipt validation: parse every text field into its typed form.
//!
//! Validation is strict about shape. Dates must be `YYYY-MM-DD`, times `HH:MM`,
//! and the total a run of digits followed by exactly two fractional digits.
//! Item prices are any non-negative decimal: `2`, `1.5` and `6.49` all parse.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::receipt::{Receipt, ValidatedItem, ValidatedReceipt};

/// Validate a receipt and parse its fields.
///
/// Checks, in order:
/// - purchase date
/// - purchase time
/// - total
/// - each item price
///
/// The first malformed field is reported.
pub fn validate_receipt(receipt: &Receipt) -> Result<ValidatedReceipt, ValidationError> {
    let purchase_date = parse_date(&receipt.purchase_date)?;
    let purchase_time = parse_time(&receipt.purchase_time)?;
    let total = parse_amount("total", &receipt.total)?;

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let price = parse_price(&format!("items[{}].price", i), &item.price)?;
            Ok(ValidatedItem {
                short_description: item.short_description.clone(),
                price,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(ValidatedReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return Err(ValidationError::InvalidDate(s.to_string()));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` 24-hour time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidTime(s.to_string());

    let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hh.parse().map_err(|_| invalid())?;
    let minute: u32 = mm.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parse a non-negative amount with exactly two fractional digits.
///
/// `field` names the receipt field for error reporting.
pub fn parse_amount(field: &str, s: &str) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidAmount {
        field: field.to_string(),
        value: s.to_string(),
    };

    let (whole, frac) = s.split_once('.').ok_or_else(invalid)?;
    if whole.is_empty() || frac.len() != 2 {
        return Err(invalid());
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Overflows past Decimal's 28 significant digits are rejected, not rounded.
    Decimal::from_str_exact(s).map_err(|_| invalid())
}

/// Parse a non-negative decimal price: digits with an optional fraction.
pub fn parse_price(field: &str, s: &str) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidAmount {
        field: field.to_string(),
        value: s.to_string(),
    };

    let (whole, frac) = match s.split_once('.') {
        Some((_, "")) => return Err(invalid()),
        Some(parts) => parts,
        None => (s, ""),
    };
    if whole.is_empty() || !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    Decimal::from_str_exact(s).map_err(|_| invalid())
}
