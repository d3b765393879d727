// Stub problem API (axum) bound to an ephemeral port

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Fixed "now" shared by fixtures and the test clock
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 1, 9, 0, 0).unwrap()
}

pub fn wire_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One request as seen by the stub
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct StubState {
    pub problems: Vec<Value>,
    pub notes: Vec<(String, Value)>,
    pub requests: Vec<Recorded>,
    pub fail_with: Option<StatusCode>,
    next_id: u32,
}

pub type Shared = Arc<Mutex<StubState>>;

pub struct StubServer {
    pub url: String,
    pub state: Shared,
}

impl StubServer {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn fail_with(&self, status: StatusCode) {
        self.state.lock().unwrap().fail_with = Some(status);
    }
}

/// Problems seeded out of order: 30h old, 1h old, 24h old, 1h old (tie)
pub fn seed_problems() -> Vec<Value> {
    vec![
        problem_json("p-old", "PRB0001001", "Printer jam", now() - Duration::hours(30)),
        problem_json("p-fresh-a", "PRB0001002", "VPN drops", now() - Duration::hours(1)),
        problem_json("p-edge", "PRB0001003", "Disk alert", now() - Duration::hours(24)),
        problem_json("p-fresh-b", "PRB0001004", "SSO loop", now() - Duration::hours(1)),
    ]
}

pub fn problem_json(id: &str, number: &str, short: &str, created: DateTime<Utc>) -> Value {
    json!({
        "sys_id": id,
        "number": number,
        "short_description": short,
        "description": "",
        "impact": "2",
        "urgency": "2",
        "priority": "3",
        "sys_created_on": wire_time(created),
        "sys_updated_on": wire_time(created),
        "active": "true"
    })
}

pub async fn start(problems: Vec<Value>) -> StubServer {
    let state: Shared = Arc::new(Mutex::new(StubState {
        problems,
        ..StubState::default()
    }));

    let app = Router::new()
        .route("/problems", get(list_problems))
        .route("/problem", post(create_problem))
        .route(
            "/problem/{id}",
            get(get_problem).put(update_problem).delete(delete_problem),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        url: format!("http://{}", addr),
        state,
    }
}

type Reply = Result<Json<Value>, (StatusCode, String)>;

fn record(state: &mut StubState, method: &'static str, path: String, body: Option<Value>) {
    state.requests.push(Recorded { method, path, body });
}

fn check_failure(state: &StubState) -> Result<(), (StatusCode, String)> {
    match state.fail_with {
        Some(status) => Err((status, "upstream failure".to_string())),
        None => Ok(()),
    }
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Problem not found".to_string())
}

async fn list_problems(State(state): State<Shared>) -> Reply {
    let mut state = state.lock().unwrap();
    record(&mut state, "GET", "/problems".to_string(), None);
    check_failure(&state)?;
    Ok(Json(Value::Array(state.problems.clone())))
}

async fn get_problem(State(state): State<Shared>, Path(id): Path<String>) -> Reply {
    let mut state = state.lock().unwrap();
    record(&mut state, "GET", format!("/problem/{}", id), None);
    check_failure(&state)?;

    let problem = state
        .problems
        .iter()
        .find(|p| p["sys_id"] == id.as_str())
        .cloned()
        .ok_or_else(not_found)?;
    let notes: Vec<Value> = state
        .notes
        .iter()
        .filter(|(owner, _)| owner == &id)
        .map(|(_, note)| note.clone())
        .collect();

    Ok(Json(json!({ "problem": problem, "workNotes": notes })))
}

async fn create_problem(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut state = state.lock().unwrap();
    record(&mut state, "POST", "/problem".to_string(), Some(body.clone()));
    check_failure(&state)?;

    state.next_id += 1;
    let id = format!("new-{}", state.next_id);
    let number = format!("PRB004{:04}", state.next_id);

    let mut created = problem_json(
        &id,
        &number,
        body["short_description"].as_str().unwrap_or_default(),
        now(),
    );
    created["description"] = body["description"].clone();
    state.problems.push(created.clone());

    Ok(Json(created))
}

async fn update_problem(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock().unwrap();
    record(&mut state, "PUT", format!("/problem/{}", id), Some(body.clone()));
    check_failure(&state)?;

    if !state.problems.iter().any(|p| p["sys_id"] == id.as_str()) {
        return Err(not_found());
    }

    if let Some(text) = body.get("work_notes").and_then(Value::as_str) {
        let count = state.notes.len();
        let note = json!({
            "sys_id": format!("note-{}", count + 1),
            "value": text,
            "sys_created_on": wire_time(now() + Duration::minutes(count as i64)),
            "sys_created_by": "admin"
        });
        state.notes.push((id, note));
    } else if let Some(fields) = body.as_object() {
        let problem = state
            .problems
            .iter_mut()
            .find(|p| p["sys_id"] == id.as_str())
            .ok_or_else(not_found)?;
        for (key, value) in fields {
            problem[key.as_str()] = value.clone();
        }
    }

    Ok(Json(json!({ "message": "updated" })))
}

async fn delete_problem(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    record(&mut state, "DELETE", format!("/problem/{}", id), None);
    check_failure(&state)?;

    let before = state.problems.len();
    state.problems.retain(|p| p["sys_id"] != id.as_str());
    if state.problems.len() == before {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
