//! API integration tests
//!
//! The console talks to an in-process axum server standing in for the
//! library backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Form, Json, Router,
};
use serde_json::json;

use library_admin::{
    api::{AdminApi, HttpAdminApi},
    config::{ApiConfig, AppConfig, QuantityRoute, SearchFailurePolicy},
    messages,
    models::{BookRow, BookTable, Quantity},
    prompt::Prompt,
    services::{quantity::QuantityEditor, search::SearchOutcome, ActionOutcome, Services},
    AppError, Console,
};

type RequestLog = Arc<Mutex<Vec<String>>>;

async fn update_quantity(
    State(log): State<RequestLog>,
    Path(book_id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let quantity = params.get("quantity").cloned().unwrap_or_default();
    log.lock().unwrap().push(format!("PUT quantity {} {}", book_id, quantity));

    if quantity == "13" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "대출중인 도서 수보다 적은 수량으로 수정할 수 없습니다.".to_string(),
        );
    }
    (StatusCode::OK, "Success".to_string())
}

async fn update_book(
    State(log): State<RequestLog>,
    Path(book_id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let quantity = params.get("quantity").cloned().unwrap_or_default();
    log.lock().unwrap().push(format!("PUT books {} {}", book_id, quantity));
    "Success"
}

async fn delete_book(State(log): State<RequestLog>, Path(book_id): Path<i64>) -> impl IntoResponse {
    log.lock().unwrap().push(format!("DELETE {}", book_id));

    if book_id == 404 {
        return (StatusCode::INTERNAL_SERVER_ERROR, "해당 도서를 찾을 수 없습니다.");
    }
    (StatusCode::OK, "Success")
}

async fn search_books(
    State(log): State<RequestLog>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let keyword = params.get("keyword").cloned().unwrap_or_default();
    log.lock().unwrap().push(format!("GET search {}", keyword));

    match keyword.as_str() {
        "bare" => Json(json!([
            {"title": "A", "isbn": "1", "author": "a", "publisher": "p",
             "description": "d", "pubDate": "2020", "imageUrl": "http://img/1"},
            {"title": "B", "isbn": "2", "author": "b", "publisher": "p",
             "description": "d", "pubDate": "2021", "imageUrl": "http://img/2"}
        ]))
        .into_response(),
        "null" => Json(serde_json::Value::Null).into_response(),
        "fail" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => Json(json!({
            "total": 1,
            "start": 1,
            "display": 10,
            "items": [{
                "title": "러스트 프로그래밍 공식 가이드",
                "isbn": "9791161750000",
                "author": "스티브 클라브닉",
                "publisher": "제이펍",
                "description": "Rust",
                "pubdate": "20190820",
                "image": "http://img/rust.jpg",
                "link": "http://book/rust"
            }]
        }))
        .into_response(),
    }
}

async fn register_book(
    State(log): State<RequestLog>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut fields: Vec<String> = form.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    fields.sort();
    log.lock().unwrap().push(format!("POST new-book {}", fields.join("&")));
    "Success"
}

/// Start the fake backend and return its base URL
async fn spawn_backend() -> (String, RequestLog) {
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/admin/quantity/:id", put(update_quantity))
        .route("/admin/books/:id", put(update_book))
        .route("/admin/books/:id", delete(delete_book))
        .route("/books/api/book", get(search_books))
        .route("/admin/api/book", get(search_books))
        .route("/admin/new-book", post(register_book))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake backend failed");
    });

    (format!("http://{}/", addr), log)
}

/// Prompt that answers confirmations with a fixed value and records alerts
#[derive(Default)]
struct RecordingPrompt {
    answer: bool,
    alerts: Mutex<Vec<String>>,
}

impl RecordingPrompt {
    fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            ..Default::default()
        })
    }

    fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}

fn services(base_url: &str, config: AppConfig, prompt: Arc<RecordingPrompt>) -> Services {
    let config = AppConfig {
        api: ApiConfig {
            base_url: base_url.to_string(),
            ..config.api
        },
        ..config
    };
    let api = HttpAdminApi::new(config.api.clone()).expect("Invalid API config");
    Services::new(Arc::new(api), prompt, &config)
}

#[tokio::test]
async fn test_update_quantity_default_route() {
    let (base_url, log) = spawn_backend().await;
    let prompt = RecordingPrompt::answering(true);
    let services = services(&base_url, AppConfig::default(), prompt.clone());

    let mut row = BookRow::new(7, "3");
    assert!(QuantityEditor::on_input(&mut row, "12"));

    let outcome = services.quantity.submit(&mut row).await;
    assert!(matches!(outcome, ActionOutcome::Completed { ref response } if response == "Success"));
    assert_eq!(row.current_quantity, "12");
    assert_eq!(*log.lock().unwrap(), vec!["PUT quantity 7 12".to_string()]);
    assert!(prompt.alerts().is_empty());
}

#[tokio::test]
async fn test_update_quantity_books_route() {
    let (base_url, log) = spawn_backend().await;
    let mut config = AppConfig::default();
    config.api.quantity_route = QuantityRoute::Books;
    let services = services(&base_url, config, RecordingPrompt::answering(true));

    let mut row = BookRow::new(8, "1");
    QuantityEditor::on_input(&mut row, "0");

    assert!(services.quantity.submit(&mut row).await.is_completed());
    assert_eq!(*log.lock().unwrap(), vec!["PUT books 8 0".to_string()]);
}

#[tokio::test]
async fn test_update_quantity_server_error_is_shown() {
    let (base_url, _log) = spawn_backend().await;
    let prompt = RecordingPrompt::answering(true);
    let services = services(&base_url, AppConfig::default(), prompt.clone());

    let mut row = BookRow::new(7, "20");
    QuantityEditor::on_input(&mut row, "13");

    let outcome = services.quantity.submit(&mut row).await;
    assert!(matches!(outcome, ActionOutcome::Failed(AppError::Server { status: 500, .. })));
    assert_eq!(
        prompt.alerts(),
        vec!["대출중인 도서 수보다 적은 수량으로 수정할 수 없습니다.".to_string()]
    );
    assert_eq!(row.current_quantity, "20");
}

#[tokio::test]
async fn test_invalid_quantity_never_reaches_server() {
    let (base_url, log) = spawn_backend().await;
    let prompt = RecordingPrompt::answering(true);
    let services = services(&base_url, AppConfig::default(), prompt.clone());

    let mut row = BookRow::new(7, "2");
    QuantityEditor::on_input(&mut row, "-3");

    assert!(matches!(services.quantity.submit(&mut row).await, ActionOutcome::Rejected));
    assert!(log.lock().unwrap().is_empty());
    assert_eq!(prompt.alerts(), vec![messages::INVALID_QUANTITY.to_string()]);
}

#[tokio::test]
async fn test_delete_confirmed_and_declined() {
    let (base_url, log) = spawn_backend().await;

    let declining = services(&base_url, AppConfig::default(), RecordingPrompt::answering(false));
    let mut table = BookTable::new(vec![BookRow::new(5, "1")]);
    assert!(matches!(
        declining.removal.remove(&mut table, 5).await,
        ActionOutcome::Cancelled
    ));
    assert!(log.lock().unwrap().is_empty());

    let confirming = services(&base_url, AppConfig::default(), RecordingPrompt::answering(true));
    assert!(confirming.removal.remove(&mut table, 5).await.is_completed());
    assert!(table.rows().is_empty());
    assert_eq!(*log.lock().unwrap(), vec!["DELETE 5".to_string()]);
}

#[tokio::test]
async fn test_delete_failure_is_shown() {
    let (base_url, _log) = spawn_backend().await;
    let prompt = RecordingPrompt::answering(true);
    let services = services(&base_url, AppConfig::default(), prompt.clone());

    let mut table = BookTable::default();
    let outcome = services.removal.remove(&mut table, 404).await;
    assert!(matches!(outcome, ActionOutcome::Failed(_)));
    assert_eq!(prompt.alerts(), vec!["해당 도서를 찾을 수 없습니다.".to_string()]);
}

#[tokio::test]
async fn test_search_select_and_register() {
    let (base_url, log) = spawn_backend().await;
    let prompt = RecordingPrompt::answering(true);
    let mut services = services(&base_url, AppConfig::default(), prompt.clone());
    let search = &mut services.search;

    assert!(matches!(search.search("러스트").await, SearchOutcome::Rendered(1)));

    let view = search.view().expect("modal should be open");
    assert_eq!(view.total_label.as_deref(), Some("1개의 검색 결과가 있습니다!"));
    assert_eq!(view.cards[0].title, "러스트 프로그래밍 공식 가이드");
    assert_eq!(view.cards[0].pub_date_line, "출판일: 20190820");

    let selected = search.select(0).expect("candidate 0").clone();
    assert_eq!(selected.isbn, "9791161750000");
    assert_eq!(selected.image, "http://img/rust.jpg");
    assert!(search.is_form_visible());

    assert_eq!(search.register(5).await.expect("registration"), "Success");

    let log = log.lock().unwrap();
    assert_eq!(log[0], "GET search 러스트");
    assert_eq!(
        log[1],
        "POST new-book author=스티브 클라브닉&description=Rust&image=http://img/rust.jpg\
         &isbn=9791161750000&pubDate=20190820&publisher=제이펍&quantity=5\
         &title=러스트 프로그래밍 공식 가이드"
    );
    assert!(prompt.alerts().is_empty());
}

#[tokio::test]
async fn test_search_bare_array_and_alternate_path() {
    let (base_url, _log) = spawn_backend().await;
    let mut config = AppConfig::default();
    config.api.search_path = "admin/api/book".to_string();
    let mut services = services(&base_url, config, RecordingPrompt::answering(true));

    assert!(matches!(services.search.search("bare").await, SearchOutcome::Rendered(2)));
    let view = services.search.view().unwrap();
    assert!(view.total_label.is_none());
    assert_eq!(view.cards[1].title, "B");
    assert_eq!(view.cards[1].image_url, "http://img/2");
}

#[tokio::test]
async fn test_search_null_body_renders_nothing() {
    let (base_url, _log) = spawn_backend().await;
    let mut services = services(&base_url, AppConfig::default(), RecordingPrompt::answering(true));

    assert!(matches!(services.search.search("null").await, SearchOutcome::Rendered(0)));
    assert!(services.search.view().unwrap().cards.is_empty());
}

#[tokio::test]
async fn test_search_failure_policies() {
    let (base_url, _log) = spawn_backend().await;

    let prompt = RecordingPrompt::answering(true);
    let mut notify = services(&base_url, AppConfig::default(), prompt.clone());
    assert!(matches!(notify.search.search("fail").await, SearchOutcome::Failed(_)));
    assert_eq!(prompt.alerts(), vec![messages::SEARCH_FAILED.to_string()]);

    let silent_prompt = RecordingPrompt::answering(true);
    let mut config = AppConfig::default();
    config.search.on_failure = SearchFailurePolicy::Log;
    let mut silent = services(&base_url, config, silent_prompt.clone());
    assert!(matches!(silent.search.search("fail").await, SearchOutcome::Failed(_)));
    assert!(silent_prompt.alerts().is_empty());
}

#[tokio::test]
async fn test_client_reports_server_body() {
    let (base_url, _log) = spawn_backend().await;
    let api = HttpAdminApi::new(ApiConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        ..Default::default()
    })
    .unwrap();

    let quantity = Quantity::parse("13").unwrap();
    match api.update_quantity(1, &quantity).await {
        Err(AppError::Server { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "대출중인 도서 수보다 적은 수량으로 수정할 수 없습니다.");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_console_connect_wires_services() {
    let (base_url, log) = spawn_backend().await;
    let mut config = AppConfig::default();
    config.api.base_url = base_url;
    let console =
        Console::connect(config, RecordingPrompt::answering(true)).expect("Console wiring failed");

    let mut table = BookTable::new(vec![BookRow::new(5, "1")]);
    let outcome = console.services.removal.remove(&mut table, 5).await;

    assert!(outcome.is_completed());
    assert!(table.get(5).is_none());
    assert_eq!(*log.lock().unwrap(), vec!["DELETE 5".to_string()]);
}
