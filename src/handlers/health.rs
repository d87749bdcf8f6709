use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(AppState { store }): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "products": store.len().await,
    }))
}
