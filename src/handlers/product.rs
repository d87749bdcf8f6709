// src/handlers/product.rs
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use http::header;
use serde::Serialize;
use tracing::{field, instrument, Span};

use crate::dtos::product::{CreateProductRequest, ReplaceProductRequest};
use crate::error::AppError;
use crate::state::AppState;

// Serializes explicitly so an encoding failure becomes a logged 500 instead
// of axum's plain-text fallback.
fn json_ok<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value)
        .map_err(|e| AppError::internal(format!("failed to encode response: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// GET /products - List all products
#[instrument(skip(store))]
pub async fn get_products(State(AppState { store }): State<AppState>) -> Result<Response, AppError> {
    let products = store.list().await;
    json_ok(&products)
}

// GET /products/{id} - Get single product
#[instrument(skip(store, id), fields(id = field::Empty))]
pub async fn get_product(
    id: Result<Path<i64>, PathRejection>,
    State(AppState { store }): State<AppState>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    Span::current().record("id", id);
    let product = store.get(id).await?;
    json_ok(&product)
}

// POST /products - Create new product
#[instrument(skip(store, payload))]
pub async fn create_product(
    State(AppState { store }): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let product = store.create(payload).await?;
    json_ok(&product)
}

// PUT /products/{id} - Replace product
#[instrument(skip(store, id, payload), fields(id = field::Empty))]
pub async fn update_product(
    id: Result<Path<i64>, PathRejection>,
    State(AppState { store }): State<AppState>,
    payload: Result<Json<ReplaceProductRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    Span::current().record("id", id);
    let Json(payload) = payload?;
    let product = store.replace(id, payload).await?;
    json_ok(&product)
}
