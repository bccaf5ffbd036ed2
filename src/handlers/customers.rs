//! Customer endpoints, keyed by the client-supplied string id. PATCH is the
//! same full replace as PUT (see DESIGN.md).

use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::models::Customer;
use crate::service::CustomerService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/customers",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of customers", body = [Customer]),
        (status = 400, description = "Explicit page 0")
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = CustomerService::list(&state.pool, query.page, state.page_size).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = String, Path)),
    responses(
        (status = 200, body = Customer),
        (status = 404, description = "No customer with that id")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::find(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;
    Ok(Json(customer))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = Customer,
    responses((status = 201, description = "Created, with a Location header for the new row", body = Customer))
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<Customer>,
) -> Result<impl IntoResponse, AppError> {
    let created = CustomerService::create(&state.pool, &body).await?;
    let location = format!("/api/customers/{}", created.customer_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Full replace: every mutable field is overwritten from the body. The id in
/// the body is ignored; the route id is immutable.
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = String, Path)),
    request_body = Customer,
    responses(
        (status = 204, description = "Replaced"),
        (status = 404, description = "No customer with that id")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Customer>,
) -> Result<StatusCode, AppError> {
    if !CustomerService::replace(&state.pool, &id, &body).await? {
        return Err(AppError::NotFound(format!("customer {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Same full replace as PUT, not a merge of supplied fields.
#[utoipa::path(
    patch,
    path = "/api/customers/{id}",
    params(("id" = String, Path)),
    request_body = Customer,
    responses(
        (status = 204, description = "Replaced (full overwrite, not a merge)"),
        (status = 404, description = "No customer with that id")
    )
)]
pub async fn patch_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Customer>,
) -> Result<StatusCode, AppError> {
    if !CustomerService::replace(&state.pool, &id, &body).await? {
        return Err(AppError::NotFound(format!("customer {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = String, Path)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No customer with that id")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !CustomerService::delete(&state.pool, &id).await? {
        return Err(AppError::NotFound(format!("customer {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}
