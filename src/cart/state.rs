//! Shopping Cart State Management
//!
//! This module owns the single process-wide cart and the application state
//! handed to every request handler.

use super::errors::CartError;
use super::helpers::{format_line_summary, receipt_number};
use super::models::{CartLine, CartView, Receipt};
use crate::catalog::Catalog;
use chrono::Utc;
use rust_decimal::Decimal;
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

// =============================================================================
// Cart Engine
// =============================================================================

/// Lines keyed by product id, with insertion order kept in `order`.
///
/// Every id in `order` has exactly one entry in `lines` and vice versa.
#[derive(Debug, Default)]
struct CartState {
    lines: HashMap<String, CartLine>,
    order: Vec<String>,
    receipts_issued: u64,
}

impl CartState {
    fn view(&self) -> CartView {
        let lines = self
            .order
            .iter()
            .filter_map(|id| self.lines.get(id))
            .cloned()
            .collect();
        CartView::new(lines)
    }

    /// Subtotal after setting `product_id` to `quantity`, or `None` on overflow.
    fn subtotal_with(&self, product_id: &str, price: Decimal, quantity: u32) -> Option<Decimal> {
        let changed = price.checked_mul(Decimal::from(quantity))?;
        self.order
            .iter()
            .filter(|id| id.as_str() != product_id)
            .filter_map(|id| self.lines.get(id))
            .try_fold(changed, |total, line| total.checked_add(line.amount()))
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.order.clear();
    }
}

/// The cart and checkout state machine.
///
/// Each operation holds the cart lock for its whole read-modify-write, so
/// concurrent callers never interleave. Validation always runs before the
/// first mutation; a failed call leaves the cart as it was.
#[derive(Debug)]
pub struct CartEngine {
    catalog: Arc<Catalog>,
    state: Mutex<CartState>,
}

impl CartEngine {
    /// Creates an engine with an empty cart.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: Mutex::new(CartState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartState> {
        // Mutations are validated up front, so a poisoned guard still holds a consistent cart.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `quantity` of a product, merging into an existing line when present.
    pub fn add_item(&self, product_id: &str, quantity: u64) -> Result<CartView, CartError> {
        if product_id.trim().is_empty() {
            return Err(CartError::missing_product_id());
        }
        if quantity == 0 {
            return Err(CartError::invalid_quantity());
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::quantity_overflow())?;

        let product = self
            .catalog
            .find_by_id(product_id)
            .ok_or_else(CartError::product_not_found)?;

        let mut guard = self.lock();
        let state = &mut *guard;
        let merged = match state.lines.get(product_id) {
            Some(line) => line
                .quantity
                .checked_add(quantity)
                .ok_or_else(CartError::quantity_overflow)?,
            None => quantity,
        };
        // The new subtotal must be representable before the cart is touched.
        state
            .subtotal_with(product_id, product.price, merged)
            .ok_or_else(CartError::quantity_overflow)?;

        match state.lines.get_mut(product_id) {
            Some(line) => {
                line.quantity = merged;
                tracing::info!(
                    product_id,
                    added = quantity,
                    quantity = merged,
                    "cart line merged"
                );
            }
            None => {
                state.lines.insert(
                    product_id.to_owned(),
                    CartLine {
                        product: product.clone(),
                        quantity,
                    },
                );
                state.order.push(product_id.to_owned());
                tracing::info!(product_id, quantity, "cart line added");
            }
        }

        Ok(state.view())
    }

    /// Removes the line for `product_id`, keeping the other lines in order.
    pub fn remove_item(&self, product_id: &str) -> Result<CartView, CartError> {
        let mut state = self.lock();
        if state.lines.remove(product_id).is_none() {
            return Err(CartError::item_not_in_cart());
        }
        state.order.retain(|id| id != product_id);
        tracing::info!(product_id, "cart line removed");

        Ok(state.view())
    }

    pub fn list_cart(&self) -> CartView {
        self.lock().view()
    }

    /// Converts the cart into a receipt and empties it in one step.
    pub fn checkout(&self) -> Result<Receipt, CartError> {
        let mut state = self.lock();
        if state.is_empty() {
            return Err(CartError::EmptyCart);
        }

        state.receipts_issued += 1;
        let timestamp = Utc::now();
        let number = receipt_number(timestamp, state.receipts_issued);
        let snapshot = state.view();
        let receipt = Receipt::from_view(number, timestamp, &snapshot);
        state.clear();

        tracing::info!(
            receipt_number = %receipt.receipt_number,
            total = %receipt.total,
            items = %format_line_summary(&snapshot.cart),
            "checkout complete"
        );
        Ok(receipt)
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the catalog, the cart engine and the frontend assets
#[derive(Debug)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cart: CartEngine,

    /// Directory holding the built single-page frontend
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, assets_dir: PathBuf) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            cart: CartEngine::new(Arc::clone(&catalog)),
            catalog,
            assets_dir,
        }
    }
}
