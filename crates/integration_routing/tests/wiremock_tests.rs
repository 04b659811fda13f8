//! Integration tests for the route client (wiremock-based)

use domain::TravelMode;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_routing::{HttpRouteClient, RouteClient, RoutingConfig, RoutingError};

fn config_for_mock(base_url: &str) -> RoutingConfig {
    RoutingConfig {
        base_url: base_url.to_string(),
        ..RoutingConfig::for_testing()
    }
}

const fn bergamo_milano_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[9.67, 45.695], [9.5, 45.6], [9.19, 45.464]]
            },
            "properties": {
                "summary": {"distance": 52000, "duration": 3600},
                "segments": [{"steps": [
                    {"instruction": "Head south on Via Roma"},
                    {"instruction": "Arrive at Milano"}
                ]}]
            }
        }]
    }"#
}

#[tokio::test]
async fn test_route_sends_addresses_and_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routejson"))
        .and(query_param("startaddress", "Via Roma 1, Bergamo"))
        .and(query_param("endaddress", "Piazza del Duomo, Milano"))
        .and(query_param("routemode", "driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bergamo_milano_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let route = client
        .route("Via Roma 1, Bergamo", "Piazza del Duomo, Milano", TravelMode::Car)
        .await
        .unwrap();

    assert_eq!(route.geometry.point_count(), 3);
    assert!((route.distance_meters - 52_000.0).abs() < f64::EPSILON);
    assert!((route.duration_seconds - 3_600.0).abs() < f64::EPSILON);
    assert_eq!(route.instructions.len(), 2);
}

#[tokio::test]
async fn test_route_uses_mode_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routejson"))
        .and(query_param("routemode", "foot-walking"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bergamo_milano_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    client
        .route("Bergamo", "Milano", TravelMode::Walk)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_route_directions_polyline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routejson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"routes": [{"geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@", "summary": {"distance": 500.0, "duration": 60.0}}]}"#,
        ))
        .mount(&server)
        .await;

    let client = HttpRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let route = client
        .route("A", "B", TravelMode::Bike)
        .await
        .unwrap();

    assert_eq!(route.geometry.point_count(), 3);
}

#[tokio::test]
async fn test_route_server_error_is_not_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routejson"))
        .respond_with(ResponseTemplate::new(500).set_body_string(bergamo_milano_json()))
        .mount(&server)
        .await;

    let client = HttpRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .route("Bergamo", "Milano", TravelMode::Car)
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::RequestFailed { status: 500 }));
}

#[tokio::test]
async fn test_route_error_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routejson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"error": "Mancano gli indirizzi di partenza o di arrivo."}"#,
        ))
        .mount(&server)
        .await;

    let client = HttpRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .route("Bergamo", "Milano", TravelMode::Transit)
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::Rejected(_)));
}

#[tokio::test]
async fn test_route_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routejson"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpRouteClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .route("Bergamo", "Milano", TravelMode::Car)
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::ParseError(_)));
}
