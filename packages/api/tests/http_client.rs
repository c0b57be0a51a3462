//! End-to-end checks of `HttpStudentApi` against a mock `/students` resource.

use std::sync::{Arc, Mutex};

use api::{ApiError, HttpStudentApi, StudentApi};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{StudentId, StudentPayload};

#[derive(Clone, Default)]
struct Backend {
    students: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<i64>>,
}

async fn list_students(State(backend): State<Backend>) -> Json<Value> {
    Json(Value::Array(backend.students.lock().unwrap().clone()))
}

async fn create_student(
    State(backend): State<Backend>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut next_id = backend.next_id.lock().unwrap();
    *next_id += 1;
    body["id"] = json!(*next_id);
    backend.students.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update_student(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut students = backend.students.lock().unwrap();
    let slot = students
        .iter_mut()
        .find(|s| s["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    body["id"] = json!(id);
    *slot = body.clone();
    Ok(Json(body))
}

async fn delete_student(State(backend): State<Backend>, Path(id): Path<i64>) -> StatusCode {
    let mut students = backend.students.lock().unwrap();
    let before = students.len();
    students.retain(|s| s["id"] != json!(id));
    if students.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

fn students_router(backend: Backend) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/{id}", put(update_student).delete(delete_student))
        .with_state(backend)
}

/// Serve `router` on an ephemeral port and return the collection URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/students")
}

fn payload(name: &str, age: Option<i64>) -> StudentPayload {
    StudentPayload {
        name: name.to_string(),
        age,
        address: "1 Main St".to_string(),
        guardian_name: "Grace".to_string(),
        guardian_contact: "555-0100".to_string(),
    }
}

#[tokio::test]
async fn test_crud_roundtrip() {
    let backend = Backend::default();
    let url = serve(students_router(backend.clone())).await;
    let api = HttpStudentApi::new(&url).unwrap();

    assert!(api.list().await.unwrap().is_empty());

    let ada = api.create(&payload("Ada", Some(12))).await.unwrap();
    let bob = api.create(&payload("Bob", Some(13))).await.unwrap();
    assert_eq!(ada.id, StudentId::Number(1));
    assert_eq!(bob.guardian_name, "Grace");

    // Wire names are camelCase
    let stored = backend.students.lock().unwrap()[0].clone();
    assert_eq!(stored["guardianContact"], "555-0100");
    assert_eq!(stored["age"], 12);

    let renamed = api.update(&ada.id, &payload("Adele", Some(12))).await.unwrap();
    assert_eq!(renamed.id, ada.id);
    assert_eq!(renamed.name, "Adele");

    api.remove(&bob.id).await.unwrap();
    let names: Vec<_> = api
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Adele"]);
}

#[tokio::test]
async fn test_missing_id_is_a_status_error() {
    let url = serve(students_router(Backend::default())).await;
    let api = HttpStudentApi::new(&url).unwrap();

    let err = api.update(&9.into(), &payload("Ada", Some(12))).await.unwrap_err();
    assert_eq!(err, ApiError::Status(404));
    assert!(err.is_network());
    assert_eq!(api.remove(&9.into()).await, Err(ApiError::Status(404)));
}

#[tokio::test]
async fn test_null_age_is_sent_and_echo_fails_to_decode() {
    let backend = Backend::default();
    let url = serve(students_router(backend.clone())).await;
    let api = HttpStudentApi::new(&url).unwrap();

    let err = api.create(&payload("Ada", None)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    // The request still reached the server with a null age
    let stored = backend.students.lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    assert!(stored[0]["age"].is_null());
}

#[tokio::test]
async fn test_shape_mismatch_is_a_decode_error() {
    let router = Router::new().route(
        "/students",
        get(|| async { Json(json!([{ "id": 1, "name": "A" }])) }),
    );
    let api = HttpStudentApi::new(&serve(router).await).unwrap();

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!err.is_network());
}

#[tokio::test]
async fn test_server_error_status() {
    let router = Router::new().route(
        "/students",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api = HttpStudentApi::new(&serve(router).await).unwrap();

    assert_eq!(api.list().await, Err(ApiError::Status(500)));
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpStudentApi::new(&format!("http://{addr}/students")).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
