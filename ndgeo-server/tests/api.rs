//! Router-level tests: requests go through the full axum stack without a
//! listening socket.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use ndgeo_server::{GeometryServer, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(config: ServerConfig) -> Router {
    GeometryServer::new(config).unwrap().router()
}

fn app() -> Router {
    app_with(ServerConfig::builder().rng_seed(7).build())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-6)
        .unwrap_or(false)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["geometry_engine"], "operational");
    assert_eq!(body["supported_dimensions"], "1-100");
    assert_eq!(body["supported_tilings"], json!(["regular", "hexagonal", "voronoi"]));
}

#[tokio::test]
async fn test_sphere_endpoint() {
    let (status, body) = post(app(), "/api/sphere", json!({"dimensions": 5, "radius": 1.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["volume"], 5.263789013914324));
    assert_eq!(body["parameter_name"], "radius");
    assert_eq!(body["shape_type"], "5D HyperSphere");
    assert!(approx(&body["additional_properties"]["diameter"], 2.0));
}

#[tokio::test]
async fn test_cube_endpoint_counts() {
    let (status, body) = post(app(), "/api/cube", json!({"dimensions": 3, "side_length": 2.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["volume"], 8.0));
    assert_eq!(body["shape_type"], "Cube");
    let extra = &body["additional_properties"];
    assert_eq!(extra["vertices"], 8);
    assert_eq!(extra["edges"], 12);
    assert!(approx(&extra["diagonal"], 12f64.sqrt()));
    assert!(approx(&extra["cross_section_volume"], 4.0));

    // 2^100 vertices still serializes
    let (status, body) = post(app(), "/api/cube", json!({"dimensions": 100, "side_length": 1.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["additional_properties"]["vertices"].is_number());
}

#[tokio::test]
async fn test_ellipsoid_endpoint() {
    let (status, body) = post(
        app(),
        "/api/ellipsoid",
        json!({"dimensions": 2, "semi_axes": [3.0, 5.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parameter_name"], "max_semi_axis");
    assert!(approx(&body["parameter"], 5.0));
    assert!(approx(&body["additional_properties"]["eccentricity"], 0.8));
    assert_eq!(body["additional_properties"]["is_sphere"], false);

    let (_, body) = post(
        app(),
        "/api/ellipsoid",
        json!({"dimensions": 3, "semi_axes": [1.0, 1.0, 1.0]}),
    )
    .await;
    assert!(body["additional_properties"]["eccentricity"].is_null());
    assert_eq!(body["additional_properties"]["is_sphere"], true);

    let (status, body) = post(
        app(),
        "/api/ellipsoid",
        json!({"dimensions": 3, "semi_axes": [1.0, 2.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "PARAMETER_COUNT");
    assert_eq!(body["error"]["category"], "validation");
    assert_eq!(body["error"]["recoverable"], false);
}

#[tokio::test]
async fn test_simplex_and_pyramid_endpoints() {
    let (status, body) = post(app(), "/api/simplex", json!({"dimensions": 3, "side_length": 1.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shape_type"], "Tetrahedron");
    assert_eq!(body["additional_properties"]["vertices"], 4);
    assert_eq!(body["additional_properties"]["edges"], 6);

    let (status, body) = post(
        app(),
        "/api/pyramid",
        json!({"dimensions": 3, "base_side_length": 2.0, "height": 3.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parameter_name"], "base_side_length");
    assert!(approx(&body["volume"], 4.0));
    assert_eq!(body["additional_properties"]["vertices"], 5);
    assert_eq!(body["additional_properties"]["edges"], 8);
}

#[tokio::test]
async fn test_dimension_limits() {
    let (status, body) = post(app(), "/api/sphere", json!({"dimensions": 101, "radius": 1.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "DIMENSION_LIMIT_EXCEEDED");

    let (status, body) = post(app(), "/api/sphere", json!({"dimensions": 0, "radius": 1.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_DIMENSIONS");

    let small = app_with(ServerConfig::builder().max_dimensions(4).build());
    let (status, _) = get(small, "/api/dimensions/5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(app(), "/api/cube", json!({"dimensions": 3, "side_length": -1.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
}

#[tokio::test]
async fn test_compare_and_dimension_profile() {
    let (status, body) = post(app(), "/api/compare", json!({"dimensions": 2, "parameter": 1.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["sphere_volume"], std::f64::consts::PI));
    let data = &body["comparison_data"];
    assert!(approx(&data["ratios"]["volume_ratio_sphere_cube"], std::f64::consts::PI));
    assert_eq!(data["insights"]["volume_comparison"], "sphere");
    assert_eq!(data["cube"]["vertices"], 4);

    let (status, body) = get(app(), "/api/dimensions/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dimensions"], 3);
    assert!(approx(&body["unit_sphere"]["volume"], 4.0 / 3.0 * std::f64::consts::PI));
    assert!(approx(&body["insights"]["surface_to_volume_ratio"], 3.0));
}

#[tokio::test]
async fn test_query_endpoint() {
    let (status, body) = post(
        app(),
        "/api/query",
        json!({"query": "create a 4D sphere with radius 2"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["response"].as_str().unwrap().starts_with("Created 4D HyperSphere"));

    let (status, body) = post(
        app(),
        "/api/query",
        json!({"query": "create a sphere with radius 0"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Error processing query:"));
}

#[tokio::test]
async fn test_regular_tiling() {
    let (status, body) = post(
        app(),
        "/api/tiling",
        json!({
            "tiling_type": "regular",
            "dimensions": 2,
            "bounds": [[0, 5], [0, 5]],
            "shape_type": "cube",
            "parameter": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tile_count"], 36);
    assert!(approx(&body["coverage_efficiency"], 1.0));
    assert_eq!(body["tiles"].as_array().unwrap().len(), 36);
    assert_eq!(body["pattern_properties"]["pattern_type"], "regular");
    assert_eq!(body["analysis"]["mathematical_properties"]["coordination_number"], 4);
}

#[tokio::test]
async fn test_tiling_errors() {
    let (status, body) = post(
        app(),
        "/api/tiling",
        json!({
            "tiling_type": "hexagonal",
            "dimensions": 3,
            "bounds": [[0, 1], [0, 1], [0, 1]],
            "side_length": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNSUPPORTED_DIMENSION");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("only supported in 2D"));

    let (status, body) = post(
        app(),
        "/api/tiling",
        json!({"tiling_type": "voronoi", "dimensions": 2, "bounds": [[0, 1], [0, 1]]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_SEED_SOURCE");
}

#[tokio::test]
async fn test_tile_limit() {
    let capped = app_with(ServerConfig::builder().max_tiles(10).build());
    let (status, body) = post(
        capped,
        "/api/tiling",
        json!({
            "tiling_type": "regular",
            "dimensions": 2,
            "bounds": [[0, 5], [0, 5]],
            "shape_type": "cube",
            "parameter": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "TILE_LIMIT_EXCEEDED");
    assert_eq!(body["error"]["category"], "limit");
}

#[tokio::test]
async fn test_seeded_voronoi_is_repeatable() {
    let request = json!({
        "tiling_type": "voronoi",
        "dimensions": 2,
        "bounds": [[0, 10], [0, 10]],
        "num_random_seeds": 12
    });
    let (status, first) = post(app(), "/api/tiling", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["tile_count"], 12);

    let (_, second) = post(app(), "/api/tiling", request).await;
    assert_eq!(first["tiles"], second["tiles"]);
}

#[tokio::test]
async fn test_classic_sphere() {
    let (status, body) = send(app(), Method::POST, "/api/classic-sphere?diameter=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(approx(&body["diameter"], 2.0));
    assert!(body["result"]
        .as_str()
        .unwrap()
        .contains("diameter of 2.000"));
}

#[tokio::test]
async fn test_unrepresentable_bounds_are_rejected() {
    let (status, body) = post(
        app(),
        "/api/tiling",
        json!({
            "tiling_type": "voronoi",
            "dimensions": 2,
            "bounds": [[-1e308, 1e308], [0, 1]],
            "num_random_seeds": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_BOUNDS");
}

#[tokio::test]
async fn test_shape_without_layout_is_not_capped() {
    let capped = app_with(ServerConfig::builder().max_tiles(10).build());
    let (status, body) = post(
        capped,
        "/api/tiling",
        json!({
            "tiling_type": "regular",
            "dimensions": 3,
            "bounds": [[0, 100], [0, 100], [0, 100]],
            "shape_type": "simplex",
            "parameter": 1.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tile_count"], 0);
}
