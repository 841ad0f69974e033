//! Storefront Cart Library
//!
//! This library provides the product catalog, the shared shopping cart with
//! its checkout step, and the HTTP router that exposes them.

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod config;
pub mod money;
pub mod router;
