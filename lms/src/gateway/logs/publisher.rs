use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events as structured log lines.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        info!(event_id = event.event_id.as_str(), event = event.name().as_str(), key = event.key.as_str(),
            metadata = ?event.metadata, data = event.json_data.as_str(), "domain event");
        Ok(())
    }
}
