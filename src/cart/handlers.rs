//! REST API handlers for shopping cart operations
//!
//! Thin wrappers that turn HTTP requests into cart engine calls and engine
//! results into the JSON contract used by the frontend.

use super::{
    errors::CartError,
    helpers::*,
    models::*,
    state::{AppState, SharedState},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(list_cart).post(add_to_cart))
        .route(
            "/api/cart/checkout",
            post(checkout).delete(remove_checkout_product),
        )
        .route("/api/cart/:product_id", delete(remove_from_cart))
}

/// Endpoint: GET /api/cart
async fn list_cart(State(state): State<SharedState>) -> Json<CartView> {
    Json(state.cart.list_cart())
}

/// Endpoint: POST /api/cart
/// Adds a product to the cart, merging with an existing line.
async fn add_to_cart(
    State(state): State<SharedState>,
    body: Result<Json<AddToCartInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CartUpdateResponse>), CartError> {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "unreadable add-to-cart body");
            return Err(CartError::malformed_body());
        }
    };

    let result = product_id_from_json(input.product_id.as_ref()).and_then(|product_id| {
        let quantity = quantity_from_json(input.quantity.as_ref())?;
        state.cart.add_item(product_id, quantity)
    });

    match result {
        Ok(view) => Ok((
            StatusCode::CREATED,
            Json(CartUpdateResponse {
                message: "Product added to cart",
                view,
            }),
        )),
        Err(err) => {
            tracing::debug!(error = %err, "add to cart rejected");
            Err(err)
        }
    }
}

/// Endpoint: DELETE /api/cart/:productId
async fn remove_from_cart(
    State(state): State<SharedState>,
    Path(product_id): Path<String>,
) -> Result<Json<CartUpdateResponse>, CartError> {
    remove_line(&state, &product_id)
}

/// Endpoint: DELETE /api/cart/checkout
/// The checkout route shadows `:productId` for a product literally named `checkout`.
async fn remove_checkout_product(
    State(state): State<SharedState>,
) -> Result<Json<CartUpdateResponse>, CartError> {
    remove_line(&state, "checkout")
}

fn remove_line(state: &AppState, product_id: &str) -> Result<Json<CartUpdateResponse>, CartError> {
    let view = state.cart.remove_item(product_id).inspect_err(|err| {
        tracing::debug!(product_id, error = %err, "remove from cart rejected");
    })?;

    Ok(Json(CartUpdateResponse {
        message: "Item removed from cart",
        view,
    }))
}

/// Endpoint: POST /api/cart/checkout
async fn checkout(State(state): State<SharedState>) -> Result<Json<CheckoutResponse>, CartError> {
    let receipt = state.cart.checkout().inspect_err(|err| {
        tracing::debug!(error = %err, "checkout rejected");
    })?;

    Ok(Json(CheckoutResponse {
        message: "Checkout complete",
        receipt,
    }))
}
