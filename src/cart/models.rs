//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the cart, the
//! checkout receipt and the request/response bodies of the cart API.

use crate::catalog::Product;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::helpers::round2;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product and how many of it are in the cart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unrounded `price × quantity`
    pub fn amount(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Snapshot of the cart returned by every cart operation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartView {
    /// Lines in insertion order
    pub cart: Vec<CartLine>,

    #[serde(with = "crate::money")]
    pub subtotal: Decimal,
}

impl CartView {
    pub fn new(cart: Vec<CartLine>) -> Self {
        let subtotal = cart.iter().map(CartLine::amount).sum();
        Self { cart, subtotal }
    }

    pub fn total_items(&self) -> u64 {
        self.cart.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One purchased line, copied out of the cart at checkout time
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub id: String,
    pub name: String,
    #[serde(with = "crate::money")]
    pub price: Decimal,
    pub quantity: u32,
    /// `price × quantity` rounded half away from zero to 2 places
    #[serde(with = "crate::money")]
    pub line_total: Decimal,
}

impl From<&CartLine> for ReceiptItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.clone(),
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
            line_total: round2(line.amount()),
        }
    }
}

/// Immutable record of a completed checkout
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub receipt_number: String,
    pub timestamp: DateTime<Utc>,
    pub total_items: u64,
    #[serde(with = "crate::money")]
    pub subtotal: Decimal,
    /// Equal to `subtotal`; no tax or shipping is modelled
    #[serde(with = "crate::money")]
    pub total: Decimal,
    pub items: Vec<ReceiptItem>,
}

impl Receipt {
    pub fn from_view(receipt_number: String, timestamp: DateTime<Utc>, view: &CartView) -> Self {
        Self {
            receipt_number,
            timestamp,
            total_items: view.total_items(),
            subtotal: view.subtotal,
            total: view.subtotal,
            items: view.cart.iter().map(ReceiptItem::from).collect(),
        }
    }
}

// =============================================================================
// API Inputs & Responses
// =============================================================================

/// Body of `POST /api/cart`.
///
/// Both fields stay loosely typed so that a wrong type is reported as a
/// validation message instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub product_id: Option<Value>,
    pub quantity: Option<Value>,
}

/// Response body for add and remove
#[derive(Debug, Serialize)]
pub struct CartUpdateResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub view: CartView,
}

/// Response body for checkout
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: &'static str,
    pub receipt: Receipt,
}

/// Error body shared by all API routes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
