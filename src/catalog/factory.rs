use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::{create_lookup_provider, create_publisher};
use crate::gateway::GatewayPublisherVia;

pub fn create_catalog_service(config: &Configuration, store: RepositoryStore,
                              via: GatewayPublisherVia) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(store);
    let lookup = create_lookup_provider(config)?;
    let publisher = create_publisher(via);
    Ok(Box::new(CatalogServiceImpl::new(config, book_repo, lookup, publisher)))
}
