//! HTTP route handlers.
//!
//! JSON in/out for predictions, raw bytes for the PDF download. State is
//! shared via `Arc<ServerState>`.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::config::DefaultsConfig;
use crate::model::PredictionEngine;
use crate::report::{self, pdf, ChartPayload, TableRow, TABLE_HEADER};
use crate::types::{MatchInput, MarketPrediction, PredictError};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct ServerState {
    pub engine: PredictionEngine,
    pub defaults: DefaultsConfig,
}

pub type AppState = Arc<ServerState>;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Everything the page needs to render one submission: the formatted table
/// (header + exactly one row), the bar-chart series, and the structured
/// per-market numbers for anyone who wants them raw.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub match_label: String,
    pub date_label: String,
    pub header: [&'static str; 6],
    pub row: TableRow,
    pub chart: ChartPayload,
    pub markets: Vec<MarketPrediction>,
}

/// Form pre-fill values.
#[derive(Debug, Clone, Serialize)]
pub struct DefaultsResponse {
    pub team_a: String,
    pub team_b: String,
}

/// Error payload wrapper mapping the prediction taxonomy onto HTTP codes.
#[derive(Debug)]
pub struct ApiError(PredictError);

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PredictError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PredictError::Domain(_) => StatusCode::BAD_REQUEST,
            PredictError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(status = %status, error = %self.0, "Request rejected");
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// POST /api/predictions
pub async fn post_predictions(
    State(state): State<AppState>,
    Json(input): Json<MatchInput>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let result = state.engine.predict(&input)?;
    Ok(Json(PredictionResponse {
        match_label: result.match_label.clone(),
        date_label: result.date_label.clone(),
        header: TABLE_HEADER,
        row: report::table_row(&result),
        chart: report::chart_payload(&result),
        markets: result.markets,
    }))
}

/// POST /api/predictions/pdf
///
/// Same input as the JSON endpoint; responds with the rendered document and
/// an attachment filename of the form `{A}_vs_{B}_Betting_Predictions.pdf`.
pub async fn post_predictions_pdf(
    State(state): State<AppState>,
    Json(input): Json<MatchInput>,
) -> Result<Response, ApiError> {
    let result = state.engine.predict(&input)?;
    let row = report::table_row(&result);
    let bytes = pdf::render_pdf(&row)?;
    let filename = pdf::pdf_filename(&input.team_a, &input.team_b);

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// GET /api/defaults
pub async fn get_defaults(State(state): State<AppState>) -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        team_a: state.defaults.team_a.clone(),
        team_b: state.defaults.team_b.clone(),
    })
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
