use std::time::Duration;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::{EventPublisher, SilentPublisher};
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::lookup::LookupProvider;
use crate::gateway::openlibrary::client::OpenLibraryClient;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Silent => {
            Box::new(SilentPublisher::default())
        }
    }
}

pub fn create_lookup_provider(config: &Configuration) -> LibraryResult<Box<dyn LookupProvider>> {
    let client = OpenLibraryClient::new(
        config.lookup_url.as_str(), Duration::from_secs(config.lookup_timeout_secs))?;
    Ok(Box::new(client))
}
