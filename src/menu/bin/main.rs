use std::io;
use std::path::Path;
use library::catalog::factory::create_catalog_service;
use library::core::domain::Configuration;
use library::core::library::LibraryResult;
use library::core::repository::RepositoryStore;
use library::gateway::GatewayPublisherVia;
use library::menu::cli::LibraryMenu;
use library::utils::logging::setup_console_tracing;

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_console_tracing();

    let config = Configuration::from_env();
    // the menu prints removal outcomes itself
    let mut catalog = create_catalog_service(&config, RepositoryStore::JsonFile, GatewayPublisherVia::Silent)?;
    catalog.load_from(Path::new(config.data_file.as_str())).await?;

    let stdin = io::stdin();
    let mut menu = LibraryMenu::new(catalog, stdin.lock(), io::stdout());
    menu.run().await
}
