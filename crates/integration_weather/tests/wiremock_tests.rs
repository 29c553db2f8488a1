//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/weather` response for testing
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 73.83, "lat": 15.49},
        "weather": [
            {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}
        ],
        "main": {
            "temp": 27.4,
            "feels_like": 30.9,
            "temp_min": 27.4,
            "temp_max": 27.4,
            "pressure": 1008,
            "humidity": 78
        },
        "visibility": 6000,
        "wind": {"speed": 4.2, "deg": 250},
        "clouds": {"all": 75},
        "dt": 1717243200,
        "sys": {"sunrise": 1717201320, "sunset": 1717248480},
        "timezone": 19800,
        "id": 1271157,
        "name": "Goa",
        "cod": 200
    })
}

/// Sample `/forecast` response with two days of 3-hourly points
fn sample_forecast_response() -> serde_json::Value {
    let point = |dt: i64, dt_txt: &str, temp: f64| {
        serde_json::json!({
            "dt": dt,
            "dt_txt": dt_txt,
            "main": {"temp": temp, "feels_like": temp, "pressure": 1009, "humidity": 70},
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}]
        })
    };

    serde_json::json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            point(1_717_232_400, "2024-06-01 09:00:00", 26.1),
            point(1_717_243_200, "2024-06-01 12:00:00", 28.3),
            point(1_717_254_000, "2024-06-01 15:00:00", 27.0),
            point(1_717_329_600, "2024-06-02 12:00:00", 29.5),
        ],
        "city": {"id": 1271157, "name": "Goa"}
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_by_city_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Goa"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Goa").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let conditions = result.unwrap();
    assert_eq!(conditions.city, "Goa");
    assert!((conditions.temperature - 27.4).abs() < 0.01);
    assert_eq!(conditions.humidity, 78);
    assert_eq!(conditions.condition, "Rain");
    assert_eq!(conditions.description, "light rain");
}

#[tokio::test]
async fn test_current_by_coords_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "15.49"))
        .and(query_param("lon", "73.83"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_coords(15.49, 73.83).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert_eq!(result.unwrap().city, "Goa");
}

#[tokio::test]
async fn test_snapshot_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let snapshot = client
        .current_by_city("Goa")
        .await
        .expect("success")
        .to_snapshot();

    assert!((snapshot.temperature_c - 27.4).abs() < 0.01);
    assert!(snapshot.mentions_rain());
}

#[tokio::test]
async fn test_forecast_daily_digest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Goa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let forecast = client.forecast_by_city("Goa").await.expect("success");

    assert_eq!(forecast.points.len(), 4);

    let digest = forecast.daily_digest();
    assert_eq!(digest.len(), 2, "one midday point per day");
    assert!((digest[0].temperature - 28.3).abs() < 0.01);
    assert!((digest[1].temperature - 29.5).abs() < 0.01);
}

// ============================================================================
// Failure scenarios
// ============================================================================

#[tokio::test]
async fn test_unauthorized_maps_to_invalid_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Goa").await;

    assert!(matches!(result, Err(WeatherError::InvalidApiKey)));
}

#[tokio::test]
async fn test_unknown_city_maps_to_city_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Atlantis").await;

    assert!(matches!(result, Err(WeatherError::CityNotFound(city)) if city == "Atlantis"));
}

#[tokio::test]
async fn test_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Goa").await;

    assert!(matches!(result, Err(WeatherError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_server_error_maps_to_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Goa").await;

    assert!(matches!(result, Err(WeatherError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Goa").await;

    assert!(matches!(result, Err(WeatherError::ParseError(_))));
}

#[tokio::test]
async fn test_empty_conditions_is_parse_error() {
    let mock_server = MockServer::start().await;

    let mut body = sample_current_response();
    body["weather"] = serde_json::json!([]);

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Goa").await;

    assert!(matches!(result, Err(WeatherError::ParseError(_))));
}

#[tokio::test]
async fn test_invalid_coordinates_rejected_before_request() {
    let mock_server = MockServer::start().await;
    // no mock mounted: the request must never reach the server

    let client = create_test_client(&mock_server);
    let result = client.current_by_coords(100.0, 0.0).await;

    assert!(matches!(result, Err(WeatherError::InvalidCoordinates)));
}

#[tokio::test]
async fn test_is_healthy_reflects_server_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn test_is_healthy_false_on_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await);
}
