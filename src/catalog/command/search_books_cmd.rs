use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::library::SearchField;

pub struct SearchBooksCommand {
    catalog: SharedCatalog,
}

impl SearchBooksCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub query: String,
    #[serde(default)]
    pub search_by: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str, search_by: Option<&str>) -> Self {
        Self {
            query: query.to_string(),
            search_by: search_by.map(str::to_string),
        }
    }

    pub fn field(&self) -> SearchField {
        self.search_by.as_deref().map(SearchField::from).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let catalog = self.catalog.lock().await;
        Ok(SearchBooksCommandResponse { books: catalog.find_books(req.query.as_str(), req.field()) })
    }
}
