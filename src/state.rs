//! Shared application state for all routes.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Page size for paginated lists, injected from `Settings` at startup.
    pub page_size: u32,
}
