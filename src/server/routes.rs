//! Extraction endpoint routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use tracing::info;

use crate::application::ports::{ExtractionError, Extractor};

/// Request body for the analyze endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub transcript: String,
}

/// Error body shared by every failure status
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create CORS layer for the extraction endpoint.
/// Browser clients call from arbitrary origins and send auth headers,
/// so preflights must be answered permissively.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// Build the application router over any extractor
pub fn router(extractor: Arc<dyn Extractor>) -> Router {
    Router::new()
        .route("/analyze-health", post(analyze_health))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(extractor)
}

/// Bind and run the HTTP server until it is shut down
pub async fn serve(bind: &str, extractor: Arc<dyn Extractor>) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(extractor)).await
}

/// Resolve one transcript into a structured health record
async fn analyze_health(
    State(extractor): State<Arc<dyn Extractor>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match extractor.extract(&request.transcript).await {
        Ok(extraction) => (StatusCode::OK, Json(extraction.into_record())).into_response(),
        Err(err) => {
            let status = match &err {
                ExtractionError::Validation => StatusCode::BAD_REQUEST,
                ExtractionError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                ExtractionError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
                ExtractionError::Upstream(_) | ExtractionError::Configuration => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            tracing::error!(status = status.as_u16(), error = %err, "analyze request failed");
            (
                status,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
