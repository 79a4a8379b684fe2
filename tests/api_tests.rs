use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing,
    Router,
};
use climabolivia::{auth, config, routes, AppState};
use http_body_util::BodyExt;
use mongodb::Client;
use serde_json::{json, Value};
use tower::ServiceExt;

const SECRET: &str = "test-secret";
const OWM_KEY: &str = "good-key";
// nothing listens here; store reads fail fast
const DEAD_MONGO: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300&connectTimeoutMS=300";

async fn owm_weather(Query(p): Query<HashMap<String, String>>) -> Response {
    match p.get("q").map(String::as_str) {
        Some("Cochabamba,BO") => Json(json!({
            "name": "Cochabamba",
            "main": { "temp": 29.0, "humidity": 30, "pressure": 1020 },
            "weather": [{ "main": "Clear", "description": "clear sky", "icon": "01d" }],
            "wind": { "speed": 3.0 }
        }))
        .into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "cod": 401 }))).into_response(),
    }
}

async fn spawn_owm_stub() -> String {
    let app = Router::new().route("/weather", routing::get(owm_weather));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn test_state(openweather_key: &str, openweather_base: &str) -> AppState {
    let mut settings = config::load();
    settings.mongodb_uri = DEAD_MONGO.to_string();
    settings.jwt_secret = SECRET.to_string();
    settings.openweather_api_key = openweather_key.to_string();
    settings.openweather_base_url = openweather_base.to_string();

    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("mongodb client");
    let db = client.database("clima_bolivia_test");

    AppState::new(db, settings)
}

fn token(user_id: &str) -> String {
    auth::make_token(SECRET, user_id, 1).unwrap()
}

fn get(uri: &str, bearer: Option<&str>) -> Request<axum::body::Body> {
    let mut b = Request::builder().method("GET").uri(uri);
    if let Some(t) = bearer {
        b = b.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    b.body(axum::body::Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, bearer: &str, body: Value) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {bearer}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = routes::app(test_state("", "http://127.0.0.1:1").await);

    let res = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn cities_and_nearest_city() {
    let state = test_state("", "http://127.0.0.1:1").await;

    let res = routes::app(state.clone()).oneshot(get("/cities", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["cities"].as_array().unwrap().len(), 9);
    assert_eq!(body["default"], "La Paz");

    let res = routes::app(state)
        .oneshot(get("/cities/nearest?lat=-17.4&lon=-66.1", None))
        .await
        .unwrap();
    assert_eq!(body_json(res).await["city"], "Cochabamba");
}

#[tokio::test]
async fn anonymous_weather_skips_alerts() {
    let app = routes::app(test_state("", "http://127.0.0.1:1").await);

    let res = app.oneshot(get("/weather/La%20Paz", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(body["weather"]["city"], "La Paz");
    assert_eq!(body["weather"]["is_mock"], true);
    assert_eq!(body["alert_check"]["status"], "anonymous");
}

#[tokio::test]
async fn unsupported_city_is_404() {
    let app = routes::app(test_state("", "http://127.0.0.1:1").await);

    let res = app.oneshot(get("/weather/Lima", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mock_weather_is_skipped_not_failed() {
    // store is unreachable, but mock data must not even try it
    let app = routes::app(test_state("", "http://127.0.0.1:1").await);

    let res = app
        .oneshot(get("/weather/Potos%C3%AD", Some(&token("ana"))))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(body["weather"]["city"], "Potosí");
    assert_eq!(body["alert_check"]["status"], "skipped");
    assert_eq!(body["notifications"], json!([]));
}

#[tokio::test]
async fn store_failure_is_reported_next_to_live_weather() {
    let base = spawn_owm_stub().await;
    let app = routes::app(test_state(OWM_KEY, &base).await);

    let res = app
        .oneshot(get("/weather/Cochabamba", Some(&token("ana"))))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(body["weather"]["is_mock"], false);
    assert_eq!(body["weather"]["temperature"], 29.0);
    assert_eq!(body["alert_check"]["status"], "failed");
    assert_eq!(body["alert_check"]["error"], "alert check unavailable");
    assert!(!body["alert_check"]["error"].as_str().unwrap().contains("127.0.0.1"));
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let state = test_state("", "http://127.0.0.1:1").await;

    for uri in ["/alerts", "/notifications", "/events"] {
        let res = routes::app(state.clone()).oneshot(get(uri, None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    let res = routes::app(state)
        .oneshot(get("/alerts", Some("not-a-jwt")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_in_cookie_is_accepted() {
    let state = test_state("", "http://127.0.0.1:1").await;
    let cookie = format!("{}={}", state.settings.jwt_cookie_name, token("ana"));

    let req = Request::builder()
        .method("GET")
        .uri("/notifications")
        .header(header::COOKIE, cookie)
        .body(axum::body::Body::empty())
        .unwrap();

    let res = routes::app(state).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_alert_rejects_incomplete_definitions() {
    let state = test_state("", "http://127.0.0.1:1").await;
    let t = token("ana");

    let res = routes::app(state.clone())
        .oneshot(send_json("POST", "/alerts", &t, json!({ "city": "La Paz", "condition_type": "temp_above" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(res).await["error"].as_str().unwrap().contains("threshold"));

    let res = routes::app(state)
        .oneshot(send_json("POST", "/alerts", &t, json!({ "city": "Lima", "condition_type": "rain" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_alert_id_is_rejected() {
    let state = test_state("", "http://127.0.0.1:1").await;
    let t = token("ana");

    let res = routes::app(state.clone())
        .oneshot(send_json("POST", "/alerts/xyz/active", &t, json!({ "active": false })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method("DELETE")
        .uri("/alerts/xyz")
        .header(header::AUTHORIZATION, format!("Bearer {t}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let res = routes::app(state).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn notifications_list_and_dismiss() {
    use climabolivia::models::TriggeredAlert;

    let state = test_state("", "http://127.0.0.1:1").await;
    state
        .notifications
        .merge(
            "ana",
            vec![
                TriggeredAlert { id: "a1".into(), message: "it is raining".into() },
                TriggeredAlert { id: "a2".into(), message: "condition met".into() },
            ],
        )
        .await;
    let t = token("ana");

    let res = routes::app(state.clone())
        .oneshot(get("/notifications", Some(&t)))
        .await
        .unwrap();
    let body = body_json(res).await;
    assert_eq!(body["notifications"].as_array().unwrap().len(), 2);

    let req = Request::builder()
        .method("DELETE")
        .uri("/notifications/a1")
        .header(header::AUTHORIZATION, format!("Bearer {t}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let res = routes::app(state.clone()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["dismissed"], true);
    assert_eq!(body["notifications"], json!([{ "id": "a2", "message": "condition met" }]));

    // another user sees nothing
    let res = routes::app(state)
        .oneshot(get("/notifications", Some(&token("luis"))))
        .await
        .unwrap();
    assert_eq!(body_json(res).await["notifications"], json!([]));
}
