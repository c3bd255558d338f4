use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog: SharedCatalog,
}

impl ListBooksCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let catalog = self.catalog.lock().await;
        Ok(ListBooksCommandResponse { books: catalog.books().to_vec() })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::shared;
    use crate::catalog::fixtures::{sample_books, seeded_catalog};
    use crate::core::command::Command;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let cmd = ListBooksCommand::new(shared(Box::new(seeded_catalog())));
        let res = cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(sample_books(), res.books);
        let json = serde_json::to_value(&res).expect("serialize");
        assert!(json.is_array());
        assert_eq!("The Python Guide", json[0]["title"]);
    }
}
