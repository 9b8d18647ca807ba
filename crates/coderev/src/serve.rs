use crate::prelude::{eprintln, *};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use coderev_core::types::{ReviewRequest, ReviewResponse};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::upstream::{Upstream, UpstreamOptions};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "CODEREV_PORT", default_value = "5000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[clap(flatten)]
    upstream: UpstreamOptions,
}

struct ServeState {
    upstream: Upstream,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting review relay on {}:{}...",
            options.host, options.port
        );
    }

    let addr = format!("{}:{}", options.host, options.port);

    // The relay is meant to be called from a browser frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(ServeState {
        upstream: Upstream::new(options.upstream),
    });

    let app_router = Router::new()
        .route("/api/review", post(review_handler))
        .layer(cors)
        .with_state(state);

    if global.verbose {
        eprintln!("Review endpoint: http://{}/api/review", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Relay listening on http://{addr}");

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

async fn review_handler(
    State(state): State<Arc<ServeState>>,
    Json(request): Json<ReviewRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Err(err) = validate(&request.code) {
        log::info!("Rejected review request: no code provided");
        return error_response(err);
    }

    log::info!(
        "Received review request ({} bytes, language hint: {})",
        request.code.len(),
        request.language.as_deref().unwrap_or("none")
    );

    match state.upstream.complete(&request.code).await {
        Ok(review) => match serde_json::to_value(ReviewResponse { review }) {
            Ok(body) => (StatusCode::OK, Json(body)),
            Err(e) => error_response(Error::Generic(format!("Serialization error: {e}"))),
        },
        Err(err) => {
            log::error!("Review request failed: {err}");
            error_response(err)
        }
    }
}

/// Reject empty snippets before anything is sent upstream.
fn validate(code: &str) -> Result<(), Error> {
    if code.trim().is_empty() {
        return Err(Error::NoCode);
    }

    Ok(())
}

/// Map a relay failure onto the wire.
///
/// Upstream failures keep the upstream's status code and body; the body is
/// re-embedded as JSON when it parses so the caller sees the upstream's own
/// error object. Everything else is a generic 500.
fn error_response(err: Error) -> (StatusCode, Json<serde_json::Value>) {
    match err {
        Error::NoCode => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "No code provided" })),
        ),
        Error::Upstream { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let error = serde_json::from_str::<serde_json::Value>(&body)
                .unwrap_or(serde_json::Value::String(body));
            (status, Json(serde_json::json!({ "error": error })))
        }
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "Error analyzing code",
                "details": other.to_string(),
            })),
        ),
    }
}
