//! Customer queries. Ids are client-supplied text codes, not sequences.

use crate::error::AppError;
use crate::models::Customer;
use crate::service::page_offset;
use sqlx::PgPool;

const COLUMNS: &str = "customer_id, company_name, contact_name, contact_title, address, city, \
                       region, postal_code, country, phone, fax";

pub struct CustomerService;

impl CustomerService {
    /// One page of customers, ordered by id.
    pub async fn list(
        pool: &PgPool,
        page: Option<u32>,
        page_size: u32,
    ) -> Result<Vec<Customer>, AppError> {
        let offset = page_offset(page.unwrap_or(1), page_size)?;
        let sql = format!(
            "SELECT {COLUMNS} FROM customers ORDER BY customer_id OFFSET $1 LIMIT $2"
        );
        tracing::debug!(sql = %sql, offset, page_size, "query");
        Ok(sqlx::query_as(&sql)
            .bind(offset)
            .bind(i64::from(page_size))
            .fetch_all(pool)
            .await?)
    }

    pub async fn find(pool: &PgPool, id: &str) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM customers WHERE customer_id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Insert one customer under its client-supplied id. A duplicate id
    /// surfaces as the store's unique-violation error.
    pub async fn create(pool: &PgPool, customer: &Customer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO customers \
             (customer_id, company_name, contact_name, contact_title, address, city, region, \
              postal_code, country, phone, fax) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = %customer.customer_id, "query");
        Ok(sqlx::query_as(&sql)
            .bind(&customer.customer_id)
            .bind(&customer.company_name)
            .bind(&customer.contact_name)
            .bind(&customer.contact_title)
            .bind(&customer.address)
            .bind(&customer.city)
            .bind(&customer.region)
            .bind(&customer.postal_code)
            .bind(&customer.country)
            .bind(&customer.phone)
            .bind(&customer.fax)
            .fetch_one(pool)
            .await?)
    }

    /// Overwrite every mutable field of one row; the id itself is immutable.
    /// Returns false when no row has the given id.
    pub async fn replace(pool: &PgPool, id: &str, customer: &Customer) -> Result<bool, AppError> {
        let sql = "UPDATE customers SET \
                   company_name = $1, contact_name = $2, contact_title = $3, address = $4, \
                   city = $5, region = $6, postal_code = $7, country = $8, phone = $9, fax = $10 \
                   WHERE customer_id = $11";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(&customer.company_name)
            .bind(&customer.contact_name)
            .bind(&customer.contact_title)
            .bind(&customer.address)
            .bind(&customer.city)
            .bind(&customer.region)
            .bind(&customer.postal_code)
            .bind(&customer.country)
            .bind(&customer.phone)
            .bind(&customer.fax)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row has the given id.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, AppError> {
        let sql = "DELETE FROM customers WHERE customer_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
