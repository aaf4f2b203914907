use crate::application::aggregator::Aggregator;
use crate::domain::response::PaymentOptionsResponse;
use crate::error::Result;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const PAYMENT_OPTIONS_PATH: &str = "/payment/options";

#[derive(Clone)]
pub struct AppState {
    aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(PAYMENT_OPTIONS_PATH, get(get_payment_options))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /payment/options - current status of every configured provider
pub async fn get_payment_options(State(state): State<AppState>) -> Response {
    let data = state.aggregator.collect().await;
    tracing::info!(providers = data.len(), "payment options collected");

    json_response(PaymentOptionsResponse::success(data).to_json())
}

fn json_response(body: Result<Vec<u8>>) -> Response {
    match body {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize payment options");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating response").into_response()
        }
    }
}
