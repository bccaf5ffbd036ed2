//! Row/wire shapes for the three exposed tables. One struct per entity serves
//! as both the sqlx row mapping and the JSON payload; store-assigned ids are
//! accepted on input but ignored.

pub mod category;
pub mod customer;
pub mod product;

pub use category::Category;
pub use customer::Customer;
pub use product::Product;
