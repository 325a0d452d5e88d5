use crate::prelude::*;
use axum::extract::{Query, State};
use axum::Json;
use numclass_core::classify::{classify, parse_number, Classification};
use std::sync::Arc;

use super::AppState;

/// `GET /api/classify-number?number=<value>`
///
/// Only the first `number` pair is considered when the key is repeated.
pub async fn classify_number(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> std::result::Result<Json<Classification>, Error> {
    let raw = params
        .into_iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value);

    let number = match parse_number(raw.as_deref()) {
        Ok(number) => number,
        Err(source) => {
            log::debug!("Rejecting number {raw:?}: {source}");
            return Err(Error::InvalidNumber { raw, source });
        }
    };

    // Predicates are O(sqrt n); keep them off the async workers.
    let (computed, fact) = tokio::join!(
        tokio::task::spawn_blocking(move || classify(number, String::new())),
        state.facts.resolve(number),
    );

    let mut classification = computed.map_err(|e| Error::Classification(e.to_string()))?;
    classification.fun_fact = fact.into_text();

    log::debug!(
        "Classified {}: prime={} perfect={} properties={:?}",
        classification.number,
        classification.is_prime,
        classification.is_perfect,
        classification.properties
    );

    Ok(Json(classification))
}

#[cfg(test)]
mod tests {
    use super::super::{router, AppState, CLASSIFY_ROUTE};
    use crate::facts::NumbersApi;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn build_router(facts_url: &str) -> Router {
        let facts = NumbersApi::new(facts_url, Duration::from_secs(2)).unwrap();
        router(Arc::new(AppState { facts }))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    async fn provider_with_text(number: &str, text: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/{number}/math")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": text })),
            )
            .mount(&server)
            .await;
        server
    }

    // ============================================================================
    // Success path
    // ============================================================================

    #[tokio::test]
    async fn test_armstrong_number_uses_synthesized_fact() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (status, json) = get(
            build_router(&server.uri()),
            "/api/classify-number?number=371",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "number": 371,
                "is_prime": false,
                "is_perfect": false,
                "properties": ["armstrong", "odd"],
                "digit_sum": 11,
                "fun_fact": "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
            })
        );
    }

    #[tokio::test]
    async fn test_non_armstrong_number_uses_provider_fact() {
        let server = provider_with_text("28", "28 is the second perfect number.").await;

        let (status, json) = get(
            build_router(&server.uri()),
            "/api/classify-number?number=28",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["is_perfect"], true);
        assert_eq!(json["is_prime"], false);
        assert_eq!(json["properties"], serde_json::json!(["even"]));
        assert_eq!(json["digit_sum"], 10);
        assert_eq!(json["fun_fact"], "28 is the second perfect number.");
    }

    #[tokio::test]
    async fn test_prime_number() {
        let server = provider_with_text("17", "17 is prime.").await;

        let (status, json) = get(
            build_router(&server.uri()),
            "/api/classify-number?number=17",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["is_prime"], true);
        assert_eq!(json["properties"], serde_json::json!(["odd"]));
    }

    #[tokio::test]
    async fn test_negative_number() {
        let (status, json) = get(
            build_router("http://127.0.0.1:9"),
            "/api/classify-number?number=-7",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["number"], -7);
        assert_eq!(json["is_prime"], false);
        assert_eq!(json["is_perfect"], false);
        // Single digit magnitude makes it Armstrong
        assert_eq!(json["properties"], serde_json::json!(["armstrong", "odd"]));
        assert_eq!(json["digit_sum"], 7);
        assert_eq!(json["fun_fact"], "-7 is an Armstrong number because 7^1 = -7");
    }

    #[tokio::test]
    async fn test_first_number_parameter_wins() {
        let server = provider_with_text("12", "twelve").await;

        let (status, json) = get(
            build_router(&server.uri()),
            "/api/classify-number?number=12&number=abc",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["number"], 12);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_stable() {
        let server = provider_with_text("12", "twelve").await;
        let app = build_router(&server.uri());

        let (_, first) = get(app.clone(), "/api/classify-number?number=12").await;
        let (_, second) = get(app, "/api/classify-number?number=12").await;

        assert_eq!(first, second);
    }

    // ============================================================================
    // Provider failures are absorbed
    // ============================================================================

    #[tokio::test]
    async fn test_provider_error_status_yields_empty_fact() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/12/math"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (status, json) = get(
            build_router(&server.uri()),
            "/api/classify-number?number=12",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["fun_fact"], "");
        assert_eq!(json["properties"], serde_json::json!(["even"]));
    }

    #[tokio::test]
    async fn test_provider_garbage_yields_empty_fact() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/12/math"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let (status, json) = get(
            build_router(&server.uri()),
            "/api/classify-number?number=12",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["fun_fact"], "");
    }

    #[tokio::test]
    async fn test_unreachable_provider_yields_empty_fact() {
        let (status, json) = get(
            build_router("http://127.0.0.1:9"),
            "/api/classify-number?number=12",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["number"], 12);
        assert_eq!(json["fun_fact"], "");
    }

    // ============================================================================
    // Invalid input
    // ============================================================================

    #[tokio::test]
    async fn test_non_integer_is_rejected() {
        let (status, json) = get(
            build_router("http://127.0.0.1:9"),
            "/api/classify-number?number=abc",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({"number": "abc", "error": true}));
    }

    #[tokio::test]
    async fn test_empty_value_is_rejected() {
        let (status, json) = get(
            build_router("http://127.0.0.1:9"),
            "/api/classify-number?number=",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({"number": "", "error": true}));
    }

    #[tokio::test]
    async fn test_missing_parameter_is_rejected() {
        let (status, json) = get(build_router("http://127.0.0.1:9"), CLASSIFY_ROUTE).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({"number": null, "error": true}));
    }

    #[tokio::test]
    async fn test_decimal_is_rejected_with_raw_echo() {
        let (status, json) = get(
            build_router("http://127.0.0.1:9"),
            "/api/classify-number?number=1.5",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["number"], "1.5");
        assert_eq!(json["error"], true);
    }

    // ============================================================================
    // Routing and CORS
    // ============================================================================

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = build_router("http://127.0.0.1:9")
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/classify-number?number=abc")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_post_is_not_allowed() {
        let response = build_router("http://127.0.0.1:9")
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/classify-number?number=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = build_router("http://127.0.0.1:9")
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
