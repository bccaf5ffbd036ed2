//! Route tables: the /api resource routes plus common service routes.

pub mod common;

pub use common::common_routes;

use crate::handlers::{categories, customers, products};
use crate::state::AppState;
use axum::{routing::get, Router};

/// All /api routes. The static `outofstock` and `discontinued` segments take
/// precedence over the `:key` capture, mirroring the original route table.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/outofstock", get(products::list_out_of_stock))
        .route(
            "/api/products/discontinued",
            get(products::list_discontinued),
        )
        .route(
            "/api/products/:key",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .patch(categories::patch_category)
                .delete(categories::delete_category),
        )
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .patch(customers::patch_customer)
                .delete(customers::delete_customer),
        )
        .with_state(state)
}
