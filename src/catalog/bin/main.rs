use std::net::SocketAddr;
use std::path::Path;
use library::catalog::controller::build_router;
use library::catalog::domain::shared;
use library::catalog::factory::create_catalog_service;
use library::core::controller::AppState;
use library::core::domain::Configuration;
use library::core::library::{LibraryError, LibraryResult};
use library::core::repository::RepositoryStore;
use library::gateway::GatewayPublisherVia;
use library::utils::logging::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_tracing();

    let config = Configuration::from_env();
    let mut catalog = create_catalog_service(&config, RepositoryStore::JsonFile, GatewayPublisherVia::Logs)?;
    catalog.load_from(Path::new(config.data_file.as_str())).await?;

    let addr: SocketAddr = config.bind_addr.parse().map_err(|err| LibraryError::validation(
        format!("invalid bind address {} due to {}", config.bind_addr, err).as_str(), None))?;
    let app = build_router(AppState::new(config, shared(catalog)));

    info!("serving library catalog on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| LibraryError::runtime(format!("server failed due to {}", err).as_str(), None))
}
