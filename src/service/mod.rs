//! Typed CRUD queries against PostgreSQL, one service per table.

pub mod categories;
pub mod customers;
pub mod products;

pub use categories::CategoryService;
pub use customers::CustomerService;
pub use products::ProductService;

use crate::error::AppError;

/// Row offset for a 1-based page number. An explicit page 0 is rejected on
/// every paginated list; callers treat an absent page as page 1. A page so
/// large that the offset leaves `i64` is rejected the same way.
pub(crate) fn page_offset(page: u32, page_size: u32) -> Result<i64, AppError> {
    if page == 0 {
        return Err(AppError::BadRequest("there is no page number 0".into()));
    }
    (i64::from(page) - 1)
        .checked_mul(i64::from(page_size))
        .ok_or_else(|| AppError::BadRequest(format!("page {page} is out of range")))
}
