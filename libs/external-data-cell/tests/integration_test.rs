use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use external_data_cell::router::external_data_routes;
use shared_utils::test_utils::{MockForecastResponses, MockHolidayResponses, TestConfig};

fn create_test_app(mock_server: &MockServer) -> Router {
    let config = TestConfig::with_external_api(mock_server.uri()).to_app_config();
    external_data_routes(Arc::new(config), reqwest::Client::new())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn mount_forecast(mock_server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("daily", "precipitation_probability_max"))
        .and(query_param("timeformat", "unixtime"))
        .and(query_param("timezone", "America/Argentina/Buenos_Aires"))
        .and(query_param("latitude", "-27.47"))
        .and(query_param("longitude", "-58.83"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_rain_outlook_for_day_in_window() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, MockForecastResponses::june_week()).await;

    let (status, body) = get(create_test_app(&mock_server), "/clima?fecha=2025-06-04").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "ciudad": "Corrientes Capital",
            "fecha": "2025-06-04",
            "probabilidad_lluvia": 95.0,
            "alerta_lluvia": "Alta probabilidad de lluvia"
        })
    );
}

#[tokio::test]
async fn test_rain_alert_threshold_at_sixty() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, MockForecastResponses::june_week()).await;

    let cases = [
        ("2025-06-01", "Baja probabilidad de lluvia"),
        ("2025-06-02", "Baja probabilidad de lluvia"),
        ("2025-06-03", "Alta probabilidad de lluvia"),
        ("2025-06-05", "Baja probabilidad de lluvia"),
    ];

    for (fecha, alert) in cases {
        let (status, body) =
            get(create_test_app(&mock_server), &format!("/clima?fecha={}", fecha)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fecha"], fecha);
        assert_eq!(body["alerta_lluvia"], alert, "fecha {}", fecha);
    }
}

#[tokio::test]
async fn test_date_outside_window_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, MockForecastResponses::june_week()).await;

    for fecha in ["2025-05-02", "2025-06-08"] {
        let (status, body) =
            get(create_test_app(&mock_server), &format!("/clima?fecha={}", fecha)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            "La fecha solicitada no está disponible en el pronóstico"
        );
    }
}

#[tokio::test]
async fn test_missing_date_never_reaches_provider() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockForecastResponses::june_week()))
        .expect(0)
        .mount(&mock_server)
        .await;

    for uri in ["/clima", "/clima?fecha=", "/clima?fecha=04-06-2025"] {
        let (status, body) = get(create_test_app(&mock_server), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Debe enviar la fecha en formato YYYY-MM-DD");
    }
}

#[tokio::test]
async fn test_provider_failures_are_generic_server_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let (status, body) = get(create_test_app(&mock_server), "/clima?fecha=2025-06-01").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al obtener datos del clima" }));
}

#[tokio::test]
async fn test_malformed_forecast_body_is_server_error() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, json!({ "daily": { "time": "soon" } })).await;

    let (status, body) = get(create_test_app(&mock_server), "/clima?fecha=2025-06-01").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error al obtener datos del clima");
}

#[tokio::test]
async fn test_missing_probability_is_server_error() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, MockForecastResponses::june_week()).await;

    let (status, body) = get(create_test_app(&mock_server), "/clima?fecha=2025-06-07").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error al obtener datos del clima");
}

#[tokio::test]
async fn test_holidays_are_forwarded_verbatim() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feriados/2025"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockHolidayResponses::holidays()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = get(create_test_app(&mock_server), "/feriados").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, MockHolidayResponses::holidays());
}

#[tokio::test]
async fn test_holiday_provider_failure_is_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feriados/2025"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = get(create_test_app(&mock_server), "/feriados").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al obtener feriados" }));
}
