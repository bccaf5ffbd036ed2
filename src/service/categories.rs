//! Category queries. The list endpoint is unpaginated and unfiltered.

use crate::error::AppError;
use crate::models::Category;
use sqlx::PgPool;

const COLUMNS: &str = "category_id, category_name, description, picture";

pub struct CategoryService;

impl CategoryService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM categories ORDER BY category_id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Category>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE category_id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Insert one category; the id in `category` is ignored in favor of the
    /// sequence. Returns the created row.
    pub async fn create(pool: &PgPool, category: &Category) -> Result<Category, AppError> {
        let sql = format!(
            "INSERT INTO categories (category_name, description, picture) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, name = %category.category_name, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&category.category_name)
            .bind(&category.description)
            .bind(&category.picture)
            .fetch_one(pool)
            .await?)
    }

    /// Overwrite every mutable field of one row. Returns false when no row
    /// has the given id.
    pub async fn replace(pool: &PgPool, id: i32, category: &Category) -> Result<bool, AppError> {
        let sql = "UPDATE categories SET category_name = $1, description = $2, picture = $3 \
                   WHERE category_id = $4";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(&category.category_name)
            .bind(&category.description)
            .bind(&category.picture)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row has the given id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM categories WHERE category_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
