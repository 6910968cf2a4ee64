// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::views::{
    Dimensions, ErrorResponse, HealthResponse, IrrigationResponse, MatrixCellView,
    MatrixResponse, SensorDetailView, SensorListResponse, SensorResponse, SensorView,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct IrrigateRequest {
    pub sensor_id: String,
}

/// Router for the `/api` surface with permissive CORS.
pub fn api_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/sensors", get(list_sensors))
        .route("/sensors/matrix", get(sensor_matrix))
        .route("/sensors/:id", get(get_sensor))
        .route("/irrigate", post(irrigate))
        .route("/health", get(health_check))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Flat sensor list with grid position and crop classification
pub async fn list_sensors(State(state): State<Arc<AppState>>) -> Json<SensorListResponse> {
    let grid = state.grid_service.grid();
    let sensors: Vec<SensorView> = grid
        .iter_cells()
        .map(|(row, col, sensor)| SensorView::from_cell(grid, row, col, sensor))
        .collect();

    Json(SensorListResponse {
        success: true,
        total_sensors: sensors.len(),
        sensors,
        matrix_dimensions: Dimensions {
            rows: grid.rows(),
            cols: grid.cols(),
        },
    })
}

/// Full 3x8 matrix in row-major nested arrays
pub async fn sensor_matrix(State(state): State<Arc<AppState>>) -> Json<MatrixResponse> {
    let grid = state.grid_service.grid();
    let mut matrix: Vec<Vec<MatrixCellView>> = (0..grid.rows()).map(|_| Vec::new()).collect();
    for (row, col, sensor) in grid.iter_cells() {
        matrix[row].push(MatrixCellView::from_cell(grid.cols(), row, col, sensor));
    }

    Json(MatrixResponse {
        success: true,
        matrix,
        dimensions: Dimensions {
            rows: grid.rows(),
            cols: grid.cols(),
        },
    })
}

/// Single sensor lookup by id
pub async fn get_sensor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.grid_service.grid().find_by_id(&id) {
        Some(sensor) => Json(SensorResponse {
            success: true,
            sensor: SensorDetailView::from(sensor),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Sensor not found")),
        )
            .into_response(),
    }
}

/// Simulated irrigation trigger, no real device control
pub async fn irrigate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IrrigateRequest>,
) -> Json<IrrigationResponse> {
    let ack = state.grid_service.irrigate(&request.sensor_id);
    Json(IrrigationResponse {
        success: true,
        message: ack.message,
        timestamp: ack.timestamp,
    })
}

/// Health probe reporting grid population and dimensions
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let grid = state.grid_service.grid();
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Local::now().to_rfc3339(),
        sensors_loaded: grid.sensor_count() > 0,
        matrix_size: format!("{}x{}", grid.rows(), grid.cols()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grid_service::GridService;
    use crate::domain::grid::{SensorGrid, GRID_COLS, GRID_ROWS};
    use crate::domain::sensor::SensorRecord;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let records: Vec<SensorRecord> = (0..24)
            .map(|i| SensorRecord {
                id: format!("S{:03}", i + 1),
                temperature: 20.0 + i as f64 * 0.5,
                humidity: 40.0 + i as f64,
                soil_moisture: if i % 2 == 0 { 35.0 } else { 55.0 },
                latitude: 36.5 + i as f64 * 0.001,
                longitude: 10.1 + (i % 8) as f64 * 0.01,
                timestamp: None,
            })
            .collect();
        let grid = SensorGrid::build(records, GRID_ROWS, GRID_COLS).unwrap();
        let state = Arc::new(AppState {
            grid_service: GridService::new(grid),
        });
        api_router(state)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_sensors() {
        let (status, body) = get_json(test_router(), "/api/sensors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_sensors"], 24);
        assert_eq!(body["matrix_dimensions"]["rows"], 3);
        assert_eq!(body["matrix_dimensions"]["cols"], 8);

        let first = &body["sensors"][0];
        assert_eq!(first["position"]["row"], 0);
        assert_eq!(first["position"]["col"], 0);
        assert_eq!(first["cellId"], "C1");
        assert_eq!(first["crop"], "tomatoes");
        assert!(first["needsWater"].is_boolean());
    }

    #[tokio::test]
    async fn test_sensor_matrix_shape_and_crops() {
        let (status, body) = get_json(test_router(), "/api/sensors/matrix").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["dimensions"]["rows"], 3);
        assert_eq!(body["matrix"].as_array().unwrap().len(), 3);
        assert_eq!(body["matrix"][0].as_array().unwrap().len(), 8);
        // row 1 spans cells 9..16: onions then mint
        assert_eq!(body["matrix"][1][0]["crop"], "onions");
        assert_eq!(body["matrix"][1][5]["crop"], "onions");
        assert_eq!(body["matrix"][1][6]["crop"], "mint");
        assert_eq!(body["matrix"][2][7]["crop"], "mint");
    }

    #[tokio::test]
    async fn test_get_sensor_by_id() {
        let (status, body) = get_json(test_router(), "/api/sensors/S013").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["sensor"]["id"], "S013");
        assert_eq!(
            body["sensor"]["needsWater"],
            body["sensor"]["soil_moisture"].as_f64().unwrap() < 40.0
        );
    }

    #[tokio::test]
    async fn test_get_unknown_sensor_is_404() {
        let (status, body) = get_json(test_router(), "/api/sensors/S999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Sensor not found");
    }

    #[tokio::test]
    async fn test_irrigate_acknowledges() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/irrigate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"sensor_id":"S007"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Irrigation started for S007");
        assert!(!body["timestamp"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_probe() {
        let (status, body) = get_json(test_router(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["sensors_loaded"], true);
        assert_eq!(body["matrix_size"], "3x8");
    }

    #[tokio::test]
    async fn test_cors_is_permissive() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
