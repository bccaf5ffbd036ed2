//! Northwind API: REST endpoints over the product, category, and customer tables.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, DEFAULT_PAGE_SIZE};
pub use docs::ApiDoc;
pub use error::AppError;
pub use models::{Category, Customer, Product};
pub use routes::{api_routes, common_routes};
pub use service::{CategoryService, CustomerService, ProductService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
