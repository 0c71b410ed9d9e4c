/// Workout plan route tests
///
/// Verifies the JSON contracts of the /workout-plans endpoints: on-demand
/// plan creation, full replacement semantics and the invalid-entry error
/// body.
use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn response_json(response: Response) -> serde_json::Value {
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body_bytes).unwrap()
}

async fn create_workout(app: &Router, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/workouts",
            serde_json::json!({"name": name}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

/// Test: GET /workout-plans/{day} materializes a default plan
#[tokio::test]
async fn test_get_plan_creates_default() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/workout-plans/monday"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["day"], "monday");
    assert_eq!(body["isBreakDay"], false);
    assert_eq!(body["warmup"], serde_json::json!([]));
    assert_eq!(body["workouts"], serde_json::json!([]));
    assert_eq!(body["cooldown"], serde_json::json!([]));
    assert!(body["createdAt"].is_string(), "createdAt must be string");
    assert!(body["updatedAt"].is_string(), "updatedAt must be string");
}

/// Test: GET /workout-plans/{day} rejects unknown days
#[tokio::test]
async fn test_get_plan_rejects_unknown_day() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/workout-plans/funday"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "ValidationError");
    assert_eq!(body["message"], "funday is not a valid day of the week");
}

/// Test: GET /workout-plans returns the full week in order
#[tokio::test]
async fn test_list_plans_materializes_week() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/workout-plans"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let plans = body.as_array().unwrap();
    assert_eq!(plans.len(), 7);

    let days: Vec<&str> = plans
        .iter()
        .map(|plan| plan["day"].as_str().unwrap())
        .collect();
    assert_eq!(
        days,
        vec![
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday"
        ]
    );
}

/// Test: PATCH /workout-plans/{day} response schema with populated entries
#[tokio::test]
async fn test_replace_plan_round_trip() {
    let (app, _pool) = common::create_test_app().await;

    let squat = create_workout(&app, "Squat").await;
    let jog = create_workout(&app, "Jog").await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/monday",
            serde_json::json!({
                "warmup": [{"workout": jog, "note": "5 minutes"}],
                "workouts": [{"workout": squat}],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["day"], "monday");
    assert_eq!(body["isBreakDay"], false);

    let warmup = body["warmup"].as_array().unwrap();
    assert_eq!(warmup.len(), 1);
    assert!(warmup[0]["id"].is_string(), "entry id must be string");
    assert_eq!(warmup[0]["note"], "5 minutes");

    // An entry embeds the full workout record
    let embedded = &warmup[0]["workout"];
    assert_eq!(embedded["id"], jog.as_str());
    assert_eq!(embedded["name"], "Jog");
    assert!(embedded["createdAt"].is_string());
    assert!(embedded["updatedAt"].is_string());

    let workouts = body["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["note"], "");
    assert_eq!(workouts[0]["workout"]["id"], squat.as_str());
}

/// Test: PATCH /workout-plans/{day} referential integrity error contract
#[tokio::test]
async fn test_replace_plan_rejects_unknown_workout() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/monday",
            serde_json::json!({"workouts": [{"workout": "ghost", "note": "3x5"}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "ReferentialIntegrityError");
    assert_eq!(body["message"], "Invalid workouts");

    let invalid = body["details"]["invalidEntries"].as_array().unwrap();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0]["reason"], "workout does not exist");
    assert_eq!(invalid[0]["entry"]["workout"], "ghost");
    assert_eq!(invalid[0]["entry"]["note"], "3x5");
}

/// Test: PATCH /workout-plans/{day} reports entries without a workout id
#[tokio::test]
async fn test_replace_plan_rejects_missing_workout_id() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/tuesday",
            serde_json::json!({"cooldown": [{"note": "stretch"}, {"workout": ""}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "ReferentialIntegrityError");

    let invalid = body["details"]["invalidEntries"].as_array().unwrap();
    assert_eq!(invalid.len(), 2);
    assert_eq!(invalid[0]["reason"], "workout id not provided");
    assert_eq!(invalid[1]["reason"], "workout id not provided");
}

/// Test: PATCH /workout-plans/{day} with omitted lists clears every section
#[tokio::test]
async fn test_replace_plan_omitted_lists_clear() {
    let (app, _pool) = common::create_test_app().await;

    let squat = create_workout(&app, "Squat").await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/wednesday",
            serde_json::json!({"workouts": [{"workout": squat}], "isBreakDay": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/wednesday",
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["workouts"], serde_json::json!([]));
    assert_eq!(body["isBreakDay"], false);
}

/// Test: PATCH /workout-plans/{day} break day flag round trip
#[tokio::test]
async fn test_replace_plan_break_day() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/sunday",
            serde_json::json!({"isBreakDay": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isBreakDay"], true);

    let response = app
        .clone()
        .oneshot(get_request("/workout-plans/sunday"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["isBreakDay"], true);
}

/// Test: a rejected replacement leaves the stored plan untouched
#[tokio::test]
async fn test_failed_replace_preserves_stored_plan() {
    let (app, _pool) = common::create_test_app().await;

    let squat = create_workout(&app, "Squat").await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/friday",
            serde_json::json!({"workouts": [{"workout": squat, "note": "3x5"}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/friday",
            serde_json::json!({"workouts": [{"workout": "ghost"}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get_request("/workout-plans/friday"))
        .await
        .unwrap();
    let body = response_json(response).await;

    let workouts = body["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["workout"]["id"], squat.as_str());
    assert_eq!(workouts[0]["note"], "3x5");
}

/// Test: PATCH /workout-plans/{day} rejects unknown days before validation
#[tokio::test]
async fn test_replace_plan_rejects_unknown_day() {
    let (app, _pool) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            "/workout-plans/someday",
            serde_json::json!({"workouts": [{"workout": "ghost"}]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "ValidationError");
    assert_eq!(body["message"], "someday is not a valid day of the week");
}
