//! HTTP handlers, one module per resource.

pub mod categories;
pub mod customers;
pub mod products;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query string for paginated lists.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; absent means page 1. Page 0 is rejected.
    pub page: Option<u32>,
}
