//! REST API handlers for the product catalog

use super::models::ProductList;
use crate::cart::state::SharedState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/products", get(products_page))
}

/// Endpoint: GET /api/products
async fn list_products(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ProductList {
        products: state.catalog.products().to_vec(),
    })
}

/// Endpoint: GET /products
/// The product grid lives on the frontend's index page.
async fn products_page() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}
