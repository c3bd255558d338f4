use std::path::PathBuf;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

// AddBookCommand resolves an ISBN remotely, adds the book and persists the catalog
pub struct AddBookCommand {
    catalog: SharedCatalog,
    data_file: PathBuf,
}

impl AddBookCommand {
    pub fn new(catalog: SharedCatalog, data_file: PathBuf) -> Self {
        Self {
            catalog,
            data_file,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let isbn = req.isbn.trim();
        if isbn.is_empty() {
            return Err(CommandError::Validation { message: "ISBN is required".to_string(), reason_code: None });
        }
        let mut catalog = self.catalog.lock().await;
        let book = catalog.add_book_by_isbn(isbn).await.map_err(|err| match err {
            // an ISBN the lookup cannot resolve is a bad request, not a missing resource
            LibraryError::NotFound { message } => {
                CommandError::Validation { message, reason_code: Some("isbn_not_resolved".to_string()) }
            }
            other => CommandError::from(other),
        })?;
        catalog.save_to(&self.data_file).await?;
        Ok(AddBookCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::shared;
    use crate::catalog::fixtures::{catalog_with, RecordingPublisher, StubLookup};
    use crate::core::command::{Command, CommandError};

    fn build_cmd(path: std::path::PathBuf) -> AddBookCommand {
        let (lookup, _) = StubLookup::new(vec![BookDto::new("Le Petit Prince", "Antoine de Saint-Exupéry", "9782848300443")]);
        AddBookCommand::new(shared(Box::new(catalog_with(lookup, RecordingPublisher::new().0))), path)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("library.json");
        let cmd = build_cmd(path.clone());

        let res = cmd.execute(AddBookCommandRequest::new("9782848300443")).await.expect("should add book");
        assert_eq!("9782848300443", res.book.isbn.as_str());
        let saved = std::fs::read_to_string(&path).expect("catalog should be saved");
        assert!(saved.contains("Le Petit Prince"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_add() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cmd = build_cmd(dir.path().join("library.json"));
        let _ = cmd.execute(AddBookCommandRequest::new("9782848300443")).await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new("9782848300443")).await;
        match res {
            Err(CommandError::DuplicateKey { message }) => assert!(message.to_lowercase().contains("already exists")),
            other => panic!("unexpected {:?}", other.map(|r| r.book)),
        }
    }

    #[tokio::test]
    async fn test_should_reject_empty_isbn() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cmd = build_cmd(dir.path().join("library.json"));
        let res = cmd.execute(AddBookCommandRequest::new("  ")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_unresolved_isbn() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cmd = build_cmd(dir.path().join("library.json"));
        let res = cmd.execute(AddBookCommandRequest::new("invalid-isbn")).await;
        assert!(matches!(res, Err(CommandError::Validation { reason_code: Some(_), .. })));
    }

    #[tokio::test]
    async fn test_should_report_save_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cmd = build_cmd(dir.path().join("missing-dir").join("library.json"));
        let res = cmd.execute(AddBookCommandRequest::new("9782848300443")).await;
        assert!(matches!(res, Err(CommandError::Persistence { .. })));
    }
}
