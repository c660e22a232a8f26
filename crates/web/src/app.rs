use axum::Router;
use storage::Database;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::middleware::cors::AllowedOrigins;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::health,
        features::scores::handlers::submit_score,
        features::ranking::handlers::get_ranking,
        features::debug::handlers::debug_db,
    ),
    components(
        schemas(
            storage::dto::common::StatusResponse,
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::SubmittedScore,
            storage::dto::ranking::RankingEntry,
            storage::dto::debug::DatabaseSnapshot,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "scores", description = "Score submission"),
        (name = "ranking", description = "Public leaderboard"),
        (name = "debug", description = "Operational diagnostics"),
    )
)]
pub struct ApiDoc;

pub fn build_router(db: Database, origins: &AllowedOrigins) -> Router {
    Router::new()
        .merge(features::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(origins.layer()),
        )
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use storage::error::StorageError;
    use storage::models::NewScore;
    use storage::repository::score::ScoreRepository;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    async fn test_app() -> (TempDir, Database, Router) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::initialize(dir.path().join("ranking.db"))
            .await
            .unwrap();
        let app = build_router(db.clone(), &AllowedOrigins::default());
        (dir, db, app)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn seed(db: &Database, scores: &[NewScore]) {
        let scores = scores.to_vec();
        db.with_connection(|conn| {
            Box::pin(async move {
                let mut repo = ScoreRepository::new(conn);
                for score in &scores {
                    repo.insert(score).await?;
                }
                Ok::<_, StorageError>(())
            })
        })
        .await
        .unwrap();
    }

    fn seeded_score(i: i64) -> NewScore {
        NewScore {
            name: format!("player{i}"),
            hits: i % 10,
            total: 10,
            percent: storage::services::compute_percent(i % 10, 10),
            created_at: format!("2025-01-01T00:{:02}:{:02}.000000Z", i / 60, i % 60),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, _db, app) = test_app().await;

        let (status, body) = send(&app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_submit_then_rank() {
        let (_dir, _db, app) = test_app().await;

        let (status, body) = send(
            &app,
            post_json("/api/score", r#"{"name": "  Ana   Lima ", "hits": 7, "total": 10}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["name"], "Ana Lima");
        assert_eq!(body["hits"], 7);
        assert_eq!(body["total"], 10);
        assert_eq!(body["percent"], 70.0);
        assert!(body["created_at"].as_str().unwrap().ends_with('Z'));

        send(
            &app,
            post_json("/api/score", r#"{"name": "Bia", "hits": 3, "total": 10}"#),
        )
        .await;

        let (status, ranking) = send(&app, get("/api/ranking?limit=1")).await;
        assert_eq!(status, StatusCode::OK);
        let entries = ranking.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "Ana Lima");
        assert_eq!(entries[0]["percent"], 70.0);
        assert!(entries[0].get("id").is_none());
    }

    #[tokio::test]
    async fn test_hits_over_total_is_bad_request() {
        let (_dir, db, app) = test_app().await;

        let (status, body) = send(
            &app,
            post_json("/api/score", r#"{"name": "Ana", "hits": 11, "total": 10}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "hits exceeds total");
        assert_eq!(db.snapshot().await.unwrap().rows, 0);
    }

    #[tokio::test]
    async fn test_blank_name_is_bad_request() {
        let (_dir, db, app) = test_app().await;

        let (status, body) = send(
            &app,
            post_json("/api/score", r#"{"name": "   ", "hits": 1, "total": 10}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "invalid name");
        assert_eq!(db.snapshot().await.unwrap().rows, 0);
    }

    #[tokio::test]
    async fn test_malformed_submissions_are_unprocessable() {
        let (_dir, db, app) = test_app().await;

        let cases = [
            r#"{"name": "Ana", "total": 10}"#,
            r#"{"name": "Ana", "hits": "seven", "total": 10}"#,
            r#"{"name": "Ana", "hits": -1, "total": 10}"#,
            r#"{"name": "Ana", "hits": 0, "total": 0}"#,
            r#"{"name": "", "hits": 0, "total": 1}"#,
            r#"{"name": "Ana", "hits": 1"#,
        ];

        for case in cases {
            let (status, body) = send(&app, post_json("/api/score", case)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload: {case}");
            assert!(!body["detail"].is_null(), "payload: {case}");
        }

        assert_eq!(db.snapshot().await.unwrap().rows, 0);
    }

    #[tokio::test]
    async fn test_long_name_is_truncated() {
        let (_dir, _db, app) = test_app().await;
        let name = "abcdefghijklmnopqrstuvwxyz1234";

        let (status, body) = send(
            &app,
            post_json(
                "/api/score",
                &json!({"name": name, "hits": 1, "total": 2}).to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "abcdefghijklmnopqrstuvwx");
    }

    #[tokio::test]
    async fn test_ranking_limit_is_clamped() {
        let (_dir, db, app) = test_app().await;
        let scores: Vec<NewScore> = (0..60).map(seeded_score).collect();
        seed(&db, &scores).await;

        for (uri, expected) in [
            ("/api/ranking", 10),
            ("/api/ranking?limit=0", 1),
            ("/api/ranking?limit=-5", 1),
            ("/api/ranking?limit=25", 25),
            ("/api/ranking?limit=500", 50),
        ] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body.as_array().unwrap().len(), expected, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_ranking_is_sorted() {
        let (_dir, db, app) = test_app().await;
        let scores: Vec<NewScore> = (0..60).map(seeded_score).collect();
        seed(&db, &scores).await;

        let (_, body) = send(&app, get("/api/ranking?limit=50")).await;
        let entries = body.as_array().unwrap();

        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key = |e: &Value| {
                (
                    e["percent"].as_f64().unwrap(),
                    e["hits"].as_i64().unwrap(),
                    e["created_at"].as_str().unwrap().to_string(),
                )
            };
            let (pa, ha, ca) = key(a);
            let (pb, hb, cb) = key(b);
            assert!(
                pa > pb || (pa == pb && (ha > hb || (ha == hb && ca <= cb))),
                "{a} ranked above {b}"
            );
        }
    }

    #[tokio::test]
    async fn test_ranking_rejects_non_numeric_limit() {
        let (_dir, _db, app) = test_app().await;

        let (status, _) = send(&app, get("/api/ranking?limit=abc")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_debug_snapshot() {
        let (_dir, db, app) = test_app().await;
        seed(&db, &[seeded_score(1), seeded_score(2)]).await;

        let (status, body) = send(&app, get("/debug/db")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["db_path"], db.path().display().to_string());
        assert_eq!(body["has_scores_table"], true);
        assert_eq!(body["rows"], 2);
        assert!(body["size_bytes"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_cors_allows_declared_origin() {
        let (_dir, _db, app) = test_app().await;

        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:8080")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_ignores_other_origins() {
        let (_dir, _db, app) = test_app().await;

        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_mirrors_request() {
        let (_dir, _db, app) = test_app().await;

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/score")
            .header(header::ORIGIN, "http://127.0.0.1:8080")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "POST"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (_dir, _db, app) = test_app().await;

        let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/api/score").is_some());
        assert!(body["paths"].get("/api/ranking").is_some());
    }
}
