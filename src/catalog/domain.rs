pub mod service;

use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, SearchField};
use crate::gateway::lookup::LookupProvider;

// CatalogService owns the in-memory collection of books. No two books share an
// ISBN (compared without regard to case) and books keep their insertion order.
#[async_trait]
pub trait CatalogService: Sync + Send {
    // all books in insertion order
    fn books(&self) -> &[BookDto];

    // adds a fully formed book, failing with DuplicateKey when its ISBN is taken
    async fn add_book(&mut self, book: BookDto) -> LibraryResult<BookDto>;

    // resolves the ISBN through the lookup provider and adds the result;
    // fails with DuplicateKey before any lookup, or NotFound on a lookup miss
    async fn add_book_by_isbn(&mut self, isbn: &str) -> LibraryResult<BookDto>;

    // removes the first book with the ISBN and reports whether one was removed
    async fn remove_book(&mut self, isbn: &str) -> bool;

    fn find_books(&self, query: &str, field: SearchField) -> Vec<BookDto>;

    // online searches read no catalog state, so callers holding the shared
    // lock take this handle and release the lock before searching
    fn lookup_provider(&self) -> Arc<dyn LookupProvider>;

    fn online_search_limit(&self) -> usize;

    async fn search_online(&self, query: &str) -> Vec<BookDto>;

    // best-effort merge of the books stored at path, returning how many were added
    async fn load_from(&mut self, path: &Path) -> LibraryResult<usize>;

    async fn save_to(&self, path: &Path) -> LibraryResult<()>;
}

// SharedCatalog serializes access to one catalog across concurrent requests
pub type SharedCatalog = Arc<Mutex<Box<dyn CatalogService>>>;

pub fn shared(catalog: Box<dyn CatalogService>) -> SharedCatalog {
    Arc::new(Mutex::new(catalog))
}
