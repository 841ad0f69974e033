//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, CartView, Receipt, request and response bodies)
//! - Business logic helpers (money rounding, input parsing, receipt numbers)
//! - The cart engine and application state
//! - REST API handlers

pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use errors::CartError;
pub use handlers::routes;
pub use state::{AppState, CartEngine, SharedState};
