use std::path::PathBuf;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog: SharedCatalog,
    data_file: PathBuf,
}

impl RemoveBookCommand {
    pub fn new(catalog: SharedCatalog, data_file: PathBuf) -> Self {
        Self {
            catalog,
            data_file,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            message: format!("Book with ISBN {} has been removed", isbn),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let mut catalog = self.catalog.lock().await;
        if !catalog.remove_book(req.isbn.as_str()).await {
            return Err(CommandError::NotFound { message: format!("Book with ISBN {} not found", req.isbn) });
        }
        catalog.save_to(&self.data_file).await?;
        Ok(RemoveBookCommandResponse::new(req.isbn.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::shared;
    use crate::catalog::fixtures::seeded_catalog;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("library.json");
        let catalog = shared(Box::new(seeded_catalog()));
        let cmd = RemoveBookCommand::new(catalog.clone(), path.clone());

        let res = cmd.execute(RemoveBookCommandRequest::new("9781234567890".to_string())).await.expect("should remove book");
        assert!(res.message.contains("removed"));
        assert_eq!(2, catalog.lock().await.books().len());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_should_fail_removing_absent_book() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("library.json");
        let cmd = RemoveBookCommand::new(shared(Box::new(seeded_catalog())), path.clone());

        let res = cmd.execute(RemoveBookCommandRequest::new("nonexistent-isbn".to_string())).await;
        match res {
            Err(CommandError::NotFound { message }) => assert!(message.contains("not found")),
            other => panic!("unexpected {:?}", other.map(|r| r.message)),
        }
        assert!(!path.exists());
    }
}
