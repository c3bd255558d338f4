pub mod events;
pub mod logs;
pub mod lookup;
pub mod openlibrary;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Silent,
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_create_publisher_via() {
        assert_ne!(GatewayPublisherVia::Logs, GatewayPublisherVia::Silent);
    }
}
