//! Web server — Axum front end for the prediction engine.
//!
//! Serves the self-contained HTML form page and a small JSON/PDF API.
//! CORS enabled for local development.

pub mod routes;

use axum::{
    http::{header, HeaderValue, Method},
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use routes::AppState;

/// The embedded form page (compiled into the binary).
const INDEX_HTML: &str = include_str!("templates/index.html");

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // API routes
        .route("/api/predictions", post(routes::post_predictions))
        .route("/api/predictions/pdf", post(routes::post_predictions_pdf))
        .route("/api/defaults", get(routes::get_defaults))
        .route("/health", get(routes::health))
        // Form page
        .route("/", get(serve_index))
        .layer(cors)
        .with_state(state)
}

/// Serve the embedded HTML form page.
async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::data::FixtureProvider;
    use crate::model::PredictionEngine;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use super::routes::ServerState;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let cfg = AppConfig::default();
        Arc::new(ServerState {
            engine: PredictionEngine::new(Box::new(FixtureProvider::new(cfg.statistics))),
            defaults: cfg.defaults,
        })
    }

    fn predict_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_form_page() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), 200_000).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("MATCHCAST"));
        assert!(html.contains("Generate Predictions"));
    }

    #[tokio::test]
    async fn test_predictions_endpoint() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(predict_request(
                "/api/predictions",
                r#"{"team_a":"Arsenal","team_b":"Chelsea","match_date":"2026-08-23"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["match_label"], "Arsenal vs. Chelsea");
        assert_eq!(json["date_label"], "2026-08-23");
        assert_eq!(json["chart"]["values"].as_array().unwrap().len(), 6);
        assert_eq!(
            json["row"]["recommended"],
            "Under 2.5, Under 1.5 HT, Under 1.5 2H"
        );
    }

    #[tokio::test]
    async fn test_predictions_blank_name_rejected() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(predict_request(
                "/api/predictions",
                r#"{"team_a":"  ","team_b":"Chelsea"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("team names"));
    }

    #[tokio::test]
    async fn test_pdf_endpoint_headers() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(predict_request(
                "/api/predictions/pdf",
                r#"{"team_a":"Arsenal","team_b":"Chelsea"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/pdf"
        );
        assert_eq!(
            resp.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"Arsenal_vs_Chelsea_Betting_Predictions.pdf\""
        );

        let body = axum::body::to_bytes(resp.into_body(), 1_000_000).await.unwrap();
        assert_eq!(&body[..5], b"%PDF-");
    }

    #[tokio::test]
    async fn test_defaults_endpoint() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(Request::builder().uri("/api/defaults").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["team_a"], "Arsenal");
    }
}
