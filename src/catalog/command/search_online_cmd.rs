use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};

pub struct SearchOnlineCommand {
    catalog: SharedCatalog,
}

impl SearchOnlineCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchOnlineCommandRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SearchOnlineCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<SearchOnlineCommandRequest, SearchOnlineCommandResponse> for SearchOnlineCommand {
    async fn execute(&self, req: SearchOnlineCommandRequest) -> Result<SearchOnlineCommandResponse, CommandError> {
        let (lookup_provider, limit) = {
            let catalog = self.catalog.lock().await;
            (catalog.lookup_provider(), catalog.online_search_limit())
        };
        Ok(SearchOnlineCommandResponse { books: lookup_provider.search_by_query(req.query.as_str(), limit).await })
    }
}
