use std::path::PathBuf;
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use serde_json::{Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::search_online_cmd::{SearchOnlineCommand, SearchOnlineCommandRequest, SearchOnlineCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/search", get(search_books))
        .route("/books/search/online", get(search_online))
        .route("/books/:isbn", delete(remove_book))
        .with_state(state)
}

fn data_file(state: &AppState) -> PathBuf {
    PathBuf::from(state.config.data_file.as_str())
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog.clone()).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog.clone(), data_file(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(isbn);
    let res = RemoveBookCommand::new(state.catalog.clone(), data_file(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_online(
    State(state): State<AppState>,
    Query(req): Query<SearchOnlineCommandRequest>) -> Result<Json<SearchOnlineCommandResponse>, ServerError> {
    let res = SearchOnlineCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::books::dto::BookDto;
    use crate::catalog::command::search_books_cmd::SearchBooksCommandRequest;
    use crate::catalog::command::search_online_cmd::SearchOnlineCommandRequest;
    use crate::catalog::controller::{add_book, build_router, list_books, remove_book, search_books, search_online};
    use crate::catalog::domain::shared;
    use crate::catalog::fixtures::{catalog_with, RecordingPublisher, StubLookup};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    fn build_state(dir: &tempfile::TempDir) -> AppState {
        let (lookup, _) = StubLookup::new(vec![BookDto::new("Le Petit Prince", "Antoine de Saint-Exupéry", "9782848300443")]);
        let config = Configuration::new(&dir.path().join("library.json").to_string_lossy());
        AppState::new(config, shared(Box::new(catalog_with(lookup, RecordingPublisher::new().0))))
    }

    #[tokio::test]
    async fn test_should_route_requests() {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = build_router(build_state(&dir));
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        let client = reqwest::Client::new();
        let res = client.get(format!("http://{}/books", addr)).send().await.expect("should list books");
        assert_eq!(reqwest::StatusCode::OK, res.status());
        let books: Vec<BookDto> = res.json().await.expect("should decode books");
        assert!(books.is_empty());

        let res = client.delete(format!("http://{}/books/0000000000", addr)).send().await.expect("should call remove");
        assert_eq!(reqwest::StatusCode::NOT_FOUND, res.status());
    }

    #[tokio::test]
    async fn test_should_run_book_lifecycle() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = build_state(&dir);

        let Json(added) = add_book(State(state.clone()), Json(json!({"isbn": "9782848300443"})))
            .await.expect("should add book");
        assert_eq!("9782848300443", added.book.isbn.as_str());

        let Json(listed) = list_books(State(state.clone())).await.expect("should list books");
        assert_eq!(1, listed.books.len());

        let Json(found) = search_books(State(state.clone()),
                                       Query(SearchBooksCommandRequest::new("9782848300443", Some("isbn"))))
            .await.expect("should search");
        assert_eq!(1, found.books.len());

        let Json(removed) = remove_book(State(state.clone()), Path("9782848300443".to_string()))
            .await.expect("should remove book");
        assert!(removed.message.contains("removed"));

        let Json(found) = search_books(State(state.clone()),
                                       Query(SearchBooksCommandRequest::new("9782848300443", Some("isbn"))))
            .await.expect("should search");
        assert!(found.books.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_with_bad_request() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = build_state(&dir);
        let _ = add_book(State(state.clone()), Json(json!({"isbn": "9782848300443"}))).await.expect("should add book");
        let (status, body) = add_book(State(state.clone()), Json(json!({"isbn": "9782848300443"})))
            .await.err().expect("should fail");
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(body.to_lowercase().contains("already exists"));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_bodies() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = build_state(&dir);
        let (status, _) = add_book(State(state.clone()), Json(json!({}))).await.err().expect("missing isbn");
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = add_book(State(state.clone()), Json(json!({"isbn": ""}))).await.err().expect("empty isbn");
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = add_book(State(state.clone()), Json(json!({"isbn": "invalid-isbn"}))).await.err().expect("unknown isbn");
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_return_not_found_on_missing_delete() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (status, body) = remove_book(State(build_state(&dir)), Path("nonexistent-isbn".to_string()))
            .await.err().expect("should fail");
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert!(body.to_lowercase().contains("not found"));
    }

    #[tokio::test]
    async fn test_should_search_online() {
        let dir = tempfile::tempdir().expect("temp dir");
        let Json(res) = search_online(State(build_state(&dir)), Query(SearchOnlineCommandRequest { query: "prince".to_string() }))
            .await.expect("should search online");
        assert_eq!(1, res.books.len());
    }
}
