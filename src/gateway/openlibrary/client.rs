use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::lookup::{LookupProvider, UNKNOWN_AUTHOR, UNKNOWN_ISBN, UNKNOWN_TITLE};

const SEARCH_PATH: &str = "/search.json";
const BOOKS_PATH: &str = "/api/books";
const SEARCH_FIELDS: &str = "title,author_name,isbn";

// OpenLibraryClient looks books up through the Open Library search and books APIs
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| LibraryError::runtime(
                format!("failed to build http client due to {}", err).as_str(), None))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

#[async_trait]
impl LookupProvider for OpenLibraryClient {
    async fn search_by_query(&self, query: &str, limit: usize) -> Vec<BookDto> {
        if query.trim().is_empty() {
            return vec![];
        }
        let params = [
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("fields", SEARCH_FIELDS.to_string()),
        ];
        match self.get_json(SEARCH_PATH, &params).await {
            Ok(body) => parse_search_response(body),
            Err(err) => {
                warn!("error searching books for {:?}: {}", query, err);
                vec![]
            }
        }
    }

    async fn lookup_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        if isbn.trim().is_empty() {
            return None;
        }
        let params = [
            ("bibkeys", format!("ISBN:{}", isbn)),
            ("jscmd", "data".to_string()),
            ("format", "json".to_string()),
        ];
        match self.get_json(BOOKS_PATH, &params).await {
            Ok(body) => parse_books_response(body, isbn),
            Err(err) => {
                warn!("error fetching book by isbn {}: {}", isbn, err);
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    #[serde(default)]
    isbn: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BookData {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<AuthorData>,
}

#[derive(Debug, Deserialize)]
struct AuthorData {
    #[serde(default)]
    name: String,
}

// Each doc becomes a book with placeholders for missing fields; docs that are
// not objects of the expected shape are skipped.
pub(crate) fn parse_search_response(body: Value) -> Vec<BookDto> {
    let docs = match body.get("docs").and_then(Value::as_array) {
        Some(docs) => docs,
        None => return vec![],
    };
    docs.iter()
        .filter_map(|doc| match SearchDoc::deserialize(doc) {
            Ok(doc) => Some(BookDto::new(
                doc.title.as_deref().unwrap_or(UNKNOWN_TITLE),
                doc.author_name.first().map(String::as_str).unwrap_or(UNKNOWN_AUTHOR),
                doc.isbn.first().map(String::as_str).unwrap_or(UNKNOWN_ISBN),
            )),
            Err(err) => {
                debug!("skipping search result: {}", err);
                None
            }
        })
        .collect()
}

// The books API answers with a map keyed by `ISBN:{isbn}`; a missing key is a miss.
// The requested ISBN becomes the record's ISBN.
pub(crate) fn parse_books_response(body: Value, isbn: &str) -> Option<BookDto> {
    let mut data: HashMap<String, Value> = serde_json::from_value(body).ok()?;
    let entry = data.remove(&format!("ISBN:{}", isbn))?;
    let book: BookData = match serde_json::from_value(entry) {
        Ok(book) => book,
        Err(err) => {
            warn!("unexpected book data for isbn {}: {}", isbn, err);
            return None;
        }
    };
    Some(BookDto::new(
        book.title.as_deref().unwrap_or(UNKNOWN_TITLE),
        book.authors.first().map(|a| a.name.as_str()).unwrap_or(UNKNOWN_AUTHOR),
        isbn,
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use serde_json::json;
    use crate::books::dto::BookDto;
    use crate::gateway::lookup::LookupProvider;
    use crate::gateway::openlibrary::client::{OpenLibraryClient, parse_books_response, parse_search_response};

    #[tokio::test]
    async fn test_should_parse_search_docs() {
        let body = json!({
            "numFound": 2,
            "docs": [
                {"title": "Fluent Python", "author_name": ["Luciano Ramalho", "Other"], "isbn": ["9781491946008", "1491946008"]},
                {"title": "Untitled Notes"}
            ]
        });
        let books = parse_search_response(body);
        assert_eq!(vec![
            BookDto::new("Fluent Python", "Luciano Ramalho", "9781491946008"),
            BookDto::new("Untitled Notes", "Unknown Author", "Unknown ISBN"),
        ], books);
    }

    #[tokio::test]
    async fn test_should_substitute_missing_title() {
        let books = parse_search_response(json!({"docs": [{"author_name": [], "isbn": ["1"]}]}));
        assert_eq!(vec![BookDto::new("Unknown Title", "Unknown Author", "1")], books);
    }

    #[tokio::test]
    async fn test_should_skip_malformed_docs() {
        let books = parse_search_response(json!({"docs": [42, {"title": "Kept"}]}));
        assert_eq!(1, books.len());
        assert_eq!("Kept", books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_return_empty_without_docs() {
        assert!(parse_search_response(json!({"error": "bad"})).is_empty());
        assert!(parse_search_response(json!([])).is_empty());
    }

    #[tokio::test]
    async fn test_should_parse_book_by_isbn() {
        let body = json!({
            "ISBN:9782848300443": {
                "title": "Le Petit Prince",
                "authors": [{"name": "Antoine de Saint-Exupéry", "url": "https://openlibrary.org/authors/OL1A"}]
            }
        });
        let book = parse_books_response(body, "9782848300443").expect("should find book");
        assert_eq!(BookDto::new("Le Petit Prince", "Antoine de Saint-Exupéry", "9782848300443"), book);
    }

    #[tokio::test]
    async fn test_should_substitute_missing_book_fields() {
        let book = parse_books_response(json!({"ISBN:1": {}}), "1").expect("should find book");
        assert_eq!(BookDto::new("Unknown Title", "Unknown Author", "1"), book);
    }

    #[tokio::test]
    async fn test_should_miss_unknown_isbn() {
        assert!(parse_books_response(json!({}), "1").is_none());
        assert!(parse_books_response(json!({"ISBN:2": {"title": "Other"}}), "1").is_none());
        assert!(parse_books_response(json!("unexpected"), "1").is_none());
    }

    #[tokio::test]
    async fn test_should_short_circuit_empty_input() {
        let client = OpenLibraryClient::new("http://127.0.0.1:9/", Duration::from_millis(50)).expect("client");
        assert!(client.search_by_query("  ", 10).await.is_empty());
        assert!(client.lookup_by_isbn("").await.is_none());
    }

    #[tokio::test]
    async fn test_should_swallow_connection_failures() {
        // port 9 (discard) is not expected to serve http locally
        let client = OpenLibraryClient::new("http://127.0.0.1:9", Duration::from_millis(200)).expect("client");
        assert!(client.search_by_query("python", 3).await.is_empty());
        assert!(client.lookup_by_isbn("9781491946008").await.is_none());
    }
}
