//! Normalization server.
//!
//! Provides an HTTP API that rewrites the administrative-area fields of
//! posted addresses to their canonical display forms.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use regionnorm::config::Config;
use regionnorm::{AddressData, PreloadSupplier, RuleSupplier, Synonyms};

#[derive(Parser, Debug)]
#[command(name = "serve")]
#[command(about = "Address normalization server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Region data directory (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,
}

/// Application state shared across handlers
struct AppState {
    supplier: PreloadSupplier,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Regionnorm Server");

    let mut config = match (&args.config, &args.data_dir) {
        (Some(path), _) => Config::load_from_file(path)?,
        (None, Some(dir)) => Config::from_data_dir(dir.clone()),
        (None, None) => anyhow::bail!("Either --config or --data-dir is required"),
    };
    if let Some(dir) = &args.data_dir {
        config.global.data_dir = dir.clone();
    }
    if let Some(listen) = args.listen {
        config.global.listen = listen;
    }

    let supplier = config.load_supplier()?;
    info!(
        "Serving {} regions ({} rules)",
        supplier.loaded_regions().count(),
        supplier.rule_count()
    );

    let app = router(Arc::new(AppState { supplier }));

    info!("Starting server on {}", config.global.listen);

    let listener = tokio::net::TcpListener::bind(&config.global.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/normalize", post(normalize_handler))
        .route("/v1/normalize/batch", post(normalize_batch_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let regions: Vec<String> = state
        .supplier
        .loaded_regions()
        .map(String::from)
        .collect();

    Json(HealthResponse {
        status: if regions.is_empty() { "degraded" } else { "ok" },
        regions,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    regions: Vec<String>,
}

/// Normalize a single address
async fn normalize_handler(
    State(state): State<Arc<AppState>>,
    Json(mut address): Json<AddressData>,
) -> Result<Json<AddressData>, (StatusCode, String)> {
    if address.region_code.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "region_code is required".to_string()));
    }
    if !state.supplier.is_loaded(&address.region_code) {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No region data for {}", address.region_code),
        ));
    }

    Synonyms::new(&state.supplier).normalize_for_display(&mut address);
    Ok(Json(address))
}

/// Normalize many addresses; unknown regions come back unchanged
async fn normalize_batch_handler(
    State(state): State<Arc<AppState>>,
    Json(mut addresses): Json<Vec<AddressData>>,
) -> Json<Vec<AddressData>> {
    let synonyms = Synonyms::new(&state.supplier);
    for address in addresses.iter_mut() {
        if state.supplier.is_loaded(&address.region_code) {
            synonyms.normalize_for_display(address);
        }
    }
    Json(addresses)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use super::*;

    const CN_DATA: &str = r#"{
      "data/CN": {"key": "CN", "languages": "zh-Hans", "sub_keys": "北京市"},
      "data/CN/北京市": {"key": "北京市", "name": "北京市", "lname": "Beijing Shi", "sub_keys": "东城区"},
      "data/CN/北京市/东城区": {"key": "东城区", "name": "东城区", "lname": "Dongcheng Qu"}
    }"#;

    fn app() -> Router {
        let mut supplier = PreloadSupplier::new();
        supplier.load_region_json("CN", CN_DATA).unwrap();
        router(Arc::new(AppState { supplier }))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_normalize_endpoint() {
        let response = app()
            .oneshot(post_json(
                "/v1/normalize",
                r#"{"region_code":"CN","administrative_area":"beijing shi","locality":"dongcheng qu"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let address: AddressData = serde_json::from_slice(&body).unwrap();
        assert_eq!(address.administrative_area, "Beijing Shi");
        assert_eq!(address.locality, "Dongcheng Qu");
    }

    #[tokio::test]
    async fn test_unknown_and_missing_region() {
        let response = app()
            .oneshot(post_json("/v1/normalize", r#"{"region_code":"US"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app()
            .oneshot(post_json("/v1/normalize", r#"{"locality":"x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_batch_endpoint() {
        let response = app()
            .oneshot(post_json(
                "/v1/normalize/batch",
                r#"[{"region_code":"CN","administrative_area":"北京市"},{"region_code":"US","administrative_area":"ny"}]"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let addresses: Vec<AddressData> = serde_json::from_slice(&body).unwrap();
        assert_eq!(addresses[0].administrative_area, "北京市");
        assert_eq!(addresses[1].administrative_area, "ny");
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["regions"], serde_json::json!(["CN"]));
    }
}
