//! Product endpoints.
//!
//! `/api/products/{key}` carries both the by-id and the by-name lookup: the
//! original route table distinguished `{id:int}` from `{name}`, which axum
//! cannot express as two captures in one position, so the handler dispatches
//! on whether the segment parses as an integer.

use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::models::Product;
use crate::service::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// In-stock products that are not discontinued, one page at a time.
#[utoipa::path(
    get,
    path = "/api/products",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of in-stock, non-discontinued products", body = [Product]),
        (status = 400, description = "Explicit page 0")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_in_stock(&state.pool, query.page, state.page_size).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/outofstock",
    responses((status = 200, description = "Products with zero stock that are not discontinued", body = [Product]))
)]
pub async fn list_out_of_stock(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_out_of_stock(&state.pool).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/discontinued",
    responses((status = 200, description = "Discontinued products", body = [Product]))
)]
pub async fn list_discontinued(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_discontinued(&state.pool).await?;
    Ok(Json(products))
}

/// Lookup by id when the segment is an integer, otherwise a case-sensitive
/// substring search on the product name.
#[utoipa::path(
    get,
    path = "/api/products/{key}",
    params(("key" = String, Path, description = "Integer product id, or a product name fragment")),
    responses(
        (status = 200, description = "The product with that id, or every product whose name contains the fragment"),
        (status = 404, description = "No product with that id")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    match key.parse::<i32>() {
        Ok(id) => {
            let product = ProductService::find(&state.pool, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
            Ok(Json(product).into_response())
        }
        Err(_) => {
            let products = ProductService::search_by_name(&state.pool, &key).await?;
            Ok(Json(products).into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = Product,
    responses((status = 201, description = "Created, with a Location header for the new row", body = Product))
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    let created = ProductService::create(&state.pool, &body).await?;
    let location = format!("/api/products/{}", created.product_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Full replace: every mutable field is overwritten from the body.
#[utoipa::path(
    put,
    path = "/api/products/{key}",
    params(("key" = String, Path, description = "Integer product id; any other value matches no product")),
    request_body = Product,
    responses(
        (status = 204, description = "Replaced"),
        (status = 404, description = "No product with that id")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<Product>,
) -> Result<StatusCode, AppError> {
    // A non-integer segment matched no PUT route in the original table.
    let id: i32 = key
        .parse()
        .map_err(|_| AppError::NotFound(format!("product {key}")))?;
    if !ProductService::replace(&state.pool, id, &body).await? {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/products/{key}",
    params(("key" = String, Path, description = "Integer product id; any other value matches no product")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No product with that id")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: i32 = key
        .parse()
        .map_err(|_| AppError::NotFound(format!("product {key}")))?;
    if !ProductService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}
