use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, same_isbn, SearchField};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::gateway::lookup::LookupProvider;

const EVENT_NAME: &str = "books";

pub struct CatalogServiceImpl {
    books: Vec<BookDto>,
    online_search_limit: usize,
    book_repository: Box<dyn BookRepository>,
    lookup_provider: Arc<dyn LookupProvider>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               lookup_provider: Box<dyn LookupProvider>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            books: Vec::new(),
            online_search_limit: config.online_search_limit,
            book_repository,
            lookup_provider: Arc::from(lookup_provider),
            events_publisher,
        }
    }

    // seeds the catalog with initial books, rejecting duplicate ISBNs among them
    pub fn seeded(mut self, books: Vec<BookDto>) -> LibraryResult<Self> {
        for book in books {
            self.insert(book)?;
        }
        Ok(self)
    }

    fn contains(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| same_isbn(&b.id(), isbn))
    }

    fn insert(&mut self, book: BookDto) -> LibraryResult<()> {
        if self.contains(&book.isbn) {
            return Err(LibraryError::duplicate_key(
                format!("ISBN must be unique. Already exists: {}", book).as_str()));
        }
        self.books.push(book);
        Ok(())
    }

    async fn notify(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!("failed to publish catalog event: {}", err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    fn books(&self) -> &[BookDto] {
        &self.books
    }

    async fn add_book(&mut self, book: BookDto) -> LibraryResult<BookDto> {
        self.insert(book.clone())?;
        self.notify(DomainEvent::added(EVENT_NAME, book.isbn.as_str(), &book)).await;
        Ok(book)
    }

    async fn add_book_by_isbn(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        if self.contains(isbn) {
            return Err(LibraryError::duplicate_key(
                format!("ISBN must be unique. Already exists: {}", isbn).as_str()));
        }
        let book = self.lookup_provider.lookup_by_isbn(isbn).await
            .ok_or_else(|| LibraryError::not_found(
                format!("No book found for ISBN {}", isbn).as_str()))?;
        // the provider answers for the requested ISBN and nothing else can
        // mutate the catalog meanwhile, so the uniqueness check above still holds
        self.books.push(book.clone());
        self.notify(DomainEvent::added(EVENT_NAME, book.isbn.as_str(), &book)).await;
        Ok(book)
    }

    async fn remove_book(&mut self, isbn: &str) -> bool {
        match self.books.iter().position(|b| same_isbn(&b.id(), isbn)) {
            Some(ndx) => {
                let book = self.books.remove(ndx);
                self.notify(DomainEvent::deleted(EVENT_NAME, book.isbn.as_str(), &book)).await;
                true
            }
            None => {
                self.notify(Ok(DomainEvent::missed(EVENT_NAME, isbn))).await;
                false
            }
        }
    }

    fn find_books(&self, query: &str, field: SearchField) -> Vec<BookDto> {
        self.books.iter()
            .filter(|b| b.matches(query, field))
            .cloned()
            .collect()
    }

    fn lookup_provider(&self) -> Arc<dyn LookupProvider> {
        self.lookup_provider.clone()
    }

    fn online_search_limit(&self) -> usize {
        self.online_search_limit
    }

    async fn search_online(&self, query: &str) -> Vec<BookDto> {
        self.lookup_provider.search_by_query(query, self.online_search_limit).await
    }

    async fn load_from(&mut self, path: &Path) -> LibraryResult<usize> {
        let entries = match self.book_repository.read_all(path).await {
            Ok(entries) => entries,
            Err(err) if err.is_persistence() => {
                warn!("could not load books from {}: {}", path.display(), err);
                return Ok(0);
            }
            Err(err) => return Err(err),
        };
        let mut added = 0;
        for entry in entries {
            match entry {
                Ok(entity) => {
                    if self.contains(&entity.id()) {
                        debug!("skipping duplicate isbn {} from {}", entity.isbn, path.display());
                        continue;
                    }
                    self.books.push(BookDto::from(&entity));
                    added += 1;
                }
                Err(err) if err.is_persistence() => {
                    warn!("stopped loading books from {} after {} entries: {}", path.display(), added, err);
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        info!("loaded {} books from {}", added, path.display());
        Ok(added)
    }

    async fn save_to(&self, path: &Path) -> LibraryResult<()> {
        let entities: Vec<BookEntity> = self.books.iter().map(BookEntity::from).collect();
        self.book_repository.write_all(path, &entities).await?;
        info!("saved {} books to {}", entities.len(), path.display());
        Ok(())
    }
}
