use async_trait::async_trait;
use crate::books::dto::BookDto;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_ISBN: &str = "Unknown ISBN";

// LookupProvider resolves books against a remote bibliographic source.
// Both operations are best-effort: failures surface as an empty result.
#[async_trait]
pub trait LookupProvider: Sync + Send {
    async fn search_by_query(&self, query: &str, limit: usize) -> Vec<BookDto>;

    async fn lookup_by_isbn(&self, isbn: &str) -> Option<BookDto>;
}
