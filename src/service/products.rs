//! Product queries. Lists are ordered by `product_id` so pages are stable.

use crate::error::AppError;
use crate::models::Product;
use crate::service::page_offset;
use sqlx::PgPool;

const COLUMNS: &str = "product_id, product_name, category_id, supplier_id, quantity_per_unit, \
                       units_in_stock, units_on_order, reorder_level, unit_price, discontinued";

pub struct ProductService;

impl ProductService {
    /// One page of products with stock on hand that are not discontinued.
    pub async fn list_in_stock(
        pool: &PgPool,
        page: Option<u32>,
        page_size: u32,
    ) -> Result<Vec<Product>, AppError> {
        let offset = page_offset(page.unwrap_or(1), page_size)?;
        let sql = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE units_in_stock > 0 AND NOT discontinued \
             ORDER BY product_id OFFSET $1 LIMIT $2"
        );
        tracing::debug!(sql = %sql, offset, page_size, "query");
        Ok(sqlx::query_as(&sql)
            .bind(offset)
            .bind(i64::from(page_size))
            .fetch_all(pool)
            .await?)
    }

    /// Products with zero stock that are not discontinued. Unpaginated.
    pub async fn list_out_of_stock(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE units_in_stock = 0 AND NOT discontinued \
             ORDER BY product_id"
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    /// Discontinued products regardless of stock. Unpaginated.
    pub async fn list_discontinued(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE discontinued ORDER BY product_id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    /// Case-sensitive substring match on the product name. Unpaginated.
    pub async fn search_by_name(pool: &PgPool, name: &str) -> Result<Vec<Product>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE strpos(product_name, $1) > 0 \
             ORDER BY product_id"
        );
        tracing::debug!(sql = %sql, name, "query");
        Ok(sqlx::query_as(&sql).bind(name).fetch_all(pool).await?)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE product_id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Insert one product; the id in `product` is ignored in favor of the
    /// sequence. Returns the created row.
    pub async fn create(pool: &PgPool, product: &Product) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products \
             (product_name, category_id, supplier_id, quantity_per_unit, units_in_stock, \
              units_on_order, reorder_level, unit_price, discontinued) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, name = %product.product_name, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&product.product_name)
            .bind(product.category_id)
            .bind(product.supplier_id)
            .bind(&product.quantity_per_unit)
            .bind(product.units_in_stock)
            .bind(product.units_on_order)
            .bind(product.reorder_level)
            .bind(product.unit_price)
            .bind(product.discontinued)
            .fetch_one(pool)
            .await?)
    }

    /// Overwrite every mutable field of one row. Returns false when no row
    /// has the given id.
    pub async fn replace(pool: &PgPool, id: i32, product: &Product) -> Result<bool, AppError> {
        let sql = "UPDATE products SET \
                   product_name = $1, category_id = $2, supplier_id = $3, \
                   quantity_per_unit = $4, units_in_stock = $5, units_on_order = $6, \
                   reorder_level = $7, unit_price = $8, discontinued = $9 \
                   WHERE product_id = $10";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(&product.product_name)
            .bind(product.category_id)
            .bind(product.supplier_id)
            .bind(&product.quantity_per_unit)
            .bind(product.units_in_stock)
            .bind(product.units_on_order)
            .bind(product.reorder_level)
            .bind(product.unit_price)
            .bind(product.discontinued)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row has the given id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM products WHERE product_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
