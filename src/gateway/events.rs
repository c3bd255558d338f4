use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

// EventPublisher receives notifications about catalog changes
#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}

// SilentPublisher drops every event, for adapters that report outcomes themselves.
#[derive(Debug, Default)]
pub struct SilentPublisher {}

#[async_trait]
impl EventPublisher for SilentPublisher {
    async fn publish(&self, _event: &DomainEvent) -> LibraryResult<()> {
        Ok(())
    }
}
