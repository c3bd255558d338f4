use std::path::Path;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository reads and writes whole collections of records at a path
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // reads every entry; the outer error covers the file as a whole,
    // the inner results cover individual entries in file order
    async fn read_all(&self, path: &Path) -> LibraryResult<Vec<LibraryResult<Entity>>>;

    // replaces the contents at path with the given entities
    async fn write_all(&self, path: &Path, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
}
