//! HTTP transport — `POST /predict` with permissive CORS.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::Instrument;

use crate::service::PredictionService;
use crate::types::{ServiceError, ServiceResult};

/// Build the axum Router for the prediction endpoint.
pub fn router(service: PredictionService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(handle_predict))
        .layer(cors)
        .with_state(service)
}

/// HTTP server bound to a [`PredictionService`].
pub struct HttpTransport {
    service: PredictionService,
}

impl HttpTransport {
    pub fn new(service: PredictionService) -> Self {
        Self { service }
    }

    /// Serve on the given address until Ctrl-C.
    pub async fn run(&self, addr: &str) -> ServiceResult<()> {
        let app = router(self.service.clone());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServiceError::Io)?;

        tracing::info!("HTTP transport listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        tracing::info!("HTTP transport stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// A body that is not valid JSON is treated like a missing sequence.
async fn handle_predict(
    State(service): State<PredictionService>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("predict", %request_id);

    async move {
        let body = match body {
            Ok(Json(value)) => value,
            Err(rejection) => {
                tracing::debug!("Rejected request body: {rejection}");
                Value::Null
            }
        };

        match service.handle(&body).await {
            Ok(response) => Json(response).into_response(),
            Err(e) => e.into_response(),
        }
    }
    .instrument(span)
    .await
}
