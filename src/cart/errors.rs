use super::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Recoverable cart failures. None of them mutate the cart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Cart is empty")]
    EmptyCart,
}

impl CartError {
    pub fn missing_product_id() -> Self {
        CartError::InvalidArgument("productId is required".into())
    }
    pub fn malformed_body() -> Self {
        CartError::InvalidArgument("request body must be a JSON object".into())
    }
    pub fn invalid_quantity() -> Self {
        CartError::InvalidArgument("quantity must be a positive integer".into())
    }
    pub fn quantity_overflow() -> Self {
        CartError::InvalidArgument("quantity exceeds the per-line limit".into())
    }
    pub fn product_not_found() -> Self {
        CartError::NotFound("Product not found".into())
    }
    pub fn item_not_in_cart() -> Self {
        CartError::NotFound("Item not found in cart".into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CartError::InvalidArgument(_) | CartError::EmptyCart => StatusCode::BAD_REQUEST,
            CartError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
