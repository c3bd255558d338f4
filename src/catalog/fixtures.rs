use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryResult, same_isbn};
use crate::core::repository::RepositoryStore;
use crate::gateway::events::{EventPublisher, SilentPublisher};
use crate::gateway::lookup::LookupProvider;

pub(crate) fn sample_books() -> Vec<BookDto> {
    vec![
        BookDto::new("The Python Guide", "John Smith", "9781234567890"),
        BookDto::new("Data Science Handbook", "Jane Doe", "9780987654321"),
        BookDto::new("Machine Learning Basics", "Bob Johnson", "9781111111111"),
    ]
}

// StubLookup answers from a fixed set of books and counts lookups
pub(crate) struct StubLookup {
    books: Vec<BookDto>,
    calls: Arc<AtomicUsize>,
}

impl StubLookup {
    pub(crate) fn new(books: Vec<BookDto>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { books, calls: calls.clone() }, calls)
    }
}

#[async_trait]
impl LookupProvider for StubLookup {
    async fn search_by_query(&self, _query: &str, limit: usize) -> Vec<BookDto> {
        self.books.iter().take(limit).cloned().collect()
    }

    async fn lookup_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.books.iter().find(|b| same_isbn(&b.isbn, isbn)).cloned()
    }
}

pub(crate) struct RecordingPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingPublisher {
    pub(crate) fn new() -> (Self, Arc<Mutex<Vec<DomainEvent>>>) {
        let events = Arc::new(Mutex::new(vec![]));
        (Self { events: events.clone() }, events)
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.lock().expect("events lock").push(event.clone());
        Ok(())
    }
}

pub(crate) fn catalog_with<L, P>(lookup: L, publisher: P) -> CatalogServiceImpl
    where L: LookupProvider + 'static, P: EventPublisher + 'static {
    CatalogServiceImpl::new(&Configuration::new("test.json"),
                            create_book_repository(RepositoryStore::JsonFile),
                            Box::new(lookup), Box::new(publisher))
}

pub(crate) fn empty_catalog() -> CatalogServiceImpl {
    catalog_with(StubLookup::new(sample_books()).0, SilentPublisher::default())
}

pub(crate) fn seeded_catalog() -> CatalogServiceImpl {
    empty_catalog().seeded(sample_books()).expect("should seed catalog")
}
