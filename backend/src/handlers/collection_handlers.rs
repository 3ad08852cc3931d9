use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::repositories::content_repository::ContentError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub items: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct CollectionListResponse {
    pub collections: Vec<String>,
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CollectionResponse>, (StatusCode, Json<Value>)> {
    match state.content.get_all(&name) {
        Ok(items) => {
            info!("Serving {} items from collection {}", items.len(), name);
            Ok(Json(CollectionResponse { items: items.to_vec() }))
        }
        Err(err @ ContentError::UnknownCollection(_)) => {
            warn!("{}", err);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Collection {} not found", name) })),
            ))
        }
        Err(err) => {
            warn!("Failed to read collection {}: {}", name, err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to read collection" })),
            ))
        }
    }
}

pub async fn list_collections(State(state): State<Arc<AppState>>) -> Json<CollectionListResponse> {
    let collections = state
        .content
        .collection_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(CollectionListResponse { collections })
}
