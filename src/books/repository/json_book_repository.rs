use std::path::Path;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the catalog as a pretty-printed JSON array of
// `{title, author, isbn}` objects.
#[derive(Debug, Default)]
pub struct JsonBookRepository {}

impl JsonBookRepository {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn read_all(&self, path: &Path) -> LibraryResult<Vec<LibraryResult<BookEntity>>> {
        let contents = tokio::fs::read_to_string(path).await?;
        let entries: Vec<Value> = serde_json::from_str(&contents)?;
        debug!("read {} entries from {}", entries.len(), path.display());
        Ok(entries.into_iter()
            .map(|entry| serde_json::from_value::<BookEntity>(entry).map_err(LibraryError::from))
            .collect())
    }

    async fn write_all(&self, path: &Path, entities: &[BookEntity]) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(entities)?;
        tokio::fs::write(path, json).await?;
        debug!("wrote {} entries to {}", entities.len(), path.display());
        Ok(())
    }
}
