//! Shopping Cart Business Logic Helpers
//!
//! Money rounding, request value parsing and receipt numbering.

use super::errors::CartError;
use super::models::CartLine;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Prefix of every receipt number
pub const RECEIPT_PREFIX: &str = "VC";

/// Rounds a money amount to 2 decimal places, half away from zero.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Extracts the product id from a request value.
///
/// Missing, `null`, non-string and blank values are all rejected.
pub fn product_id_from_json(raw: Option<&Value>) -> Result<&str, CartError> {
    match raw {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.as_str()),
        _ => Err(CartError::missing_product_id()),
    }
}

/// Extracts a quantity from a request value, defaulting to 1 when absent.
///
/// Only positive integers are accepted. Integral floats such as `2.0` count as
/// integers; strings, booleans and fractional numbers do not.
pub fn quantity_from_json(raw: Option<&Value>) -> Result<u64, CartError> {
    let number = match raw {
        None | Some(Value::Null) => return Ok(1),
        Some(Value::Number(number)) => number,
        Some(_) => return Err(CartError::invalid_quantity()),
    };

    if let Some(quantity) = number.as_u64() {
        return Ok(quantity);
    }

    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 1.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(CartError::invalid_quantity()),
    }
}

/// Builds a receipt number from the checkout time and a per-engine sequence.
///
/// Example output: `"VC-1760443200000-7"`.
pub fn receipt_number(timestamp: DateTime<Utc>, sequence: u64) -> String {
    format!(
        "{}-{}-{}",
        RECEIPT_PREFIX,
        timestamp.timestamp_millis(),
        sequence
    )
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"3x Desk Lamp, 1x Mug"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn should_round_half_away_from_zero() {
        assert_eq!(round2(Decimal::new(10005, 3)), Decimal::new(1001, 2));
        assert_eq!(round2(Decimal::new(10004, 3)), Decimal::new(1000, 2));
        assert_eq!(round2(Decimal::new(-10005, 3)), Decimal::new(-1001, 2));
        assert_eq!(round2(Decimal::new(5997, 2)), Decimal::new(5997, 2));
    }

    #[test]
    fn should_default_quantity_to_one() {
        assert_eq!(quantity_from_json(None), Ok(1));
        assert_eq!(quantity_from_json(Some(&Value::Null)), Ok(1));
    }

    #[test]
    fn should_accept_integral_quantities() {
        assert_eq!(quantity_from_json(Some(&json!(3))), Ok(3));
        assert_eq!(quantity_from_json(Some(&json!(2.0))), Ok(2));
    }

    #[test]
    fn should_pass_zero_through_for_engine_validation() {
        assert_eq!(quantity_from_json(Some(&json!(0))), Ok(0));
    }

    #[test]
    fn should_reject_non_integer_quantities() {
        for raw in [json!(-1), json!(1.5), json!(-2.0), json!("2"), json!(true), json!([1])] {
            assert_eq!(
                quantity_from_json(Some(&raw)),
                Err(CartError::invalid_quantity()),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn should_require_non_blank_string_product_id() {
        assert_eq!(product_id_from_json(Some(&json!("p1"))), Ok("p1"));
        for raw in [json!(""), json!("   "), json!(7), Value::Null] {
            assert_eq!(
                product_id_from_json(Some(&raw)),
                Err(CartError::missing_product_id())
            );
        }
        assert_eq!(product_id_from_json(None), Err(CartError::missing_product_id()));
    }

    #[test]
    fn should_format_receipt_number() {
        let at = Utc.timestamp_millis_opt(1_760_443_200_123).unwrap();

        assert_eq!(receipt_number(at, 7), "VC-1760443200123-7");
    }

    #[test]
    fn should_summarize_lines() {
        let lines = vec![
            CartLine {
                product: Product {
                    id: "p1".into(),
                    name: "Desk Lamp".into(),
                    price: Decimal::ONE,
                    image_url: String::new(),
                },
                quantity: 3,
            },
            CartLine {
                product: Product {
                    id: "p2".into(),
                    name: "Mug".into(),
                    price: Decimal::ONE,
                    image_url: String::new(),
                },
                quantity: 1,
            },
        ];

        assert_eq!(format_line_summary(&lines), "3x Desk Lamp, 1x Mug");
    }
}
