//! JSON encoding for money amounts.
//!
//! Whole amounts are written as integers (`0`, `5`) and everything else as a
//! float (`19.99`). Input accepts any JSON number.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserializer, Serializer};

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    rust_decimal::serde::float::serialize(value, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    rust_decimal::serde::float::deserialize(deserializer)
}
