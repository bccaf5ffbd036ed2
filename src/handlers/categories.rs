//! Category endpoints. PATCH performs the same full replace as PUT; fields
//! absent from the body reset to null. Kept from the source behavior, see
//! DESIGN.md.

use crate::error::AppError;
use crate::models::Category;
use crate::service::CategoryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "All categories", body = [Category]))
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = CategoryService::list(&state.pool).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i32, Path)),
    responses(
        (status = 200, body = Category),
        (status = 404, description = "No category with that id")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;
    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = Category,
    responses((status = 201, description = "Created, with a Location header for the new row", body = Category))
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<Category>,
) -> Result<impl IntoResponse, AppError> {
    let created = CategoryService::create(&state.pool, &body).await?;
    let location = format!("/api/categories/{}", created.category_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Full replace: every mutable field is overwritten from the body.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i32, Path)),
    request_body = Category,
    responses(
        (status = 204, description = "Replaced"),
        (status = 404, description = "No category with that id")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Category>,
) -> Result<StatusCode, AppError> {
    if !CategoryService::replace(&state.pool, id, &body).await? {
        return Err(AppError::NotFound(format!("category {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Same full replace as PUT, not a merge of supplied fields.
#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(("id" = i32, Path)),
    request_body = Category,
    responses(
        (status = 204, description = "Replaced (full overwrite, not a merge)"),
        (status = 404, description = "No category with that id")
    )
)]
pub async fn patch_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Category>,
) -> Result<StatusCode, AppError> {
    if !CategoryService::replace(&state.pool, id, &body).await? {
        return Err(AppError::NotFound(format!("category {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i32, Path)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No category with that id")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !CategoryService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("category {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}
