use dotenvy::dotenv;
use anyhow::Context;
use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod collection_handlers;
}
mod repositories {
    pub mod content_repository;
}
mod config {
    pub mod server_config;
}

use config::server_config::ServerConfig;
use handlers::collection_handlers;
use repositories::content_repository::ContentRepository;

pub struct AppState {
    content: Arc<ContentRepository>,
}

fn cors_layer(origin: Option<&axum::http::HeaderValue>) -> CorsLayer {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn app_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(collection_handlers::health_check))
        .route("/api/collections", get(collection_handlers::list_collections))
        .route("/api/collections/{name}", get(collection_handlers::get_collection));

    // client-side routes fall back to index.html
    if let Some(dist) = &config.frontend_dist {
        let index = ServeFile::new(dist.join("index.html"));
        app = app.fallback_service(ServeDir::new(dist).fallback(index));
    }

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO))
    )
    .layer(cors_layer(config.cors_origin.as_ref()))
    .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let content = ContentRepository::load(&config.content_file)
        .with_context(|| format!("loading content from {}", config.content_file.display()))?;
    info!(
        "Loaded {} items across collections {:?}",
        content.item_count(),
        content.collection_names()
    );

    let state = Arc::new(AppState {
        content: Arc::new(content),
    });
    let app = app_router(state, &config);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, HeaderValue, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    const CONTENT: &str = r#"{
        "companyservices": [
            {"_id": "1", "serviceName": "Web Development", "isFeatured": true, "capabilities": "A\n\nB\n"},
            {"_id": "2", "serviceName": "Unknown Category", "isFeatured": false}
        ]
    }"#;

    fn test_config() -> ServerConfig {
        ServerConfig::from_lookup(|_| None).unwrap()
    }

    fn test_app(config: &ServerConfig) -> Router {
        let content = ContentRepository::from_json_str(CONTENT).unwrap();
        let state = Arc::new(AppState {
            content: Arc::new(content),
        });
        app_router(state, config)
    }

    async fn send_get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (status, body) = send_get(test_app(&test_config()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn serves_collection_items_in_order() {
        let (status, body) = send_get(test_app(&test_config()), "/api/collections/companyservices").await;
        assert_eq!(status, StatusCode::OK);

        let page: Value = serde_json::from_slice(&body).unwrap();
        let items = page["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["_id"], "1");
        assert_eq!(items[0]["isFeatured"], true);
        assert_eq!(items[1]["serviceName"], "Unknown Category");
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found() {
        let (status, body) = send_get(test_app(&test_config()), "/api/collections/blogposts").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"], "Collection blogposts not found");
    }

    #[tokio::test]
    async fn lists_collection_names() {
        let (status, body) = send_get(test_app(&test_config()), "/api/collections").await;
        assert_eq!(status, StatusCode::OK);

        let list: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list["collections"], serde_json::json!(["companyservices"]));
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let config = ServerConfig::from_lookup(|key| {
            (key == "FRONTEND_URL").then(|| "http://localhost:8080".to_string())
        })
        .unwrap();

        let response = test_app(&config)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:8080"))
        );
    }

    #[tokio::test]
    async fn serves_frontend_with_index_fallback() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>luminaryforge</html>").unwrap();
        let dist_path = dist.path().to_string_lossy().to_string();
        let config = ServerConfig::from_lookup(|key| {
            (key == "FRONTEND_DIST").then(|| dist_path.clone())
        })
        .unwrap();

        let (status, body) = send_get(test_app(&config), "/services").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("luminaryforge"));

        let (status, _) = send_get(test_app(&config), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
