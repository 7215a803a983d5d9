use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}

#[cfg(test)]
pub mod memory {
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::{LibraryError, LibraryResult};
    use crate::gateway::events::EventPublisher;

    // keeps published events so tests can assert on them, or refuses them all
    #[derive(Debug, Default)]
    pub struct MemoryPublisher {
        events: Mutex<Vec<DomainEvent>>,
        failing: bool,
    }

    impl MemoryPublisher {
        pub fn failing() -> Self {
            Self { events: Mutex::new(vec![]), failing: true }
        }

        pub fn kinds(&self) -> Vec<DomainEventType> {
            self.events.lock().expect("events lock").iter().map(|e| e.kind).collect()
        }
    }

    #[async_trait]
    impl EventPublisher for MemoryPublisher {
        async fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
            if self.failing {
                return Err(LibraryError::unavailable("event bus is down", None, true));
            }
            self.events.lock().expect("events lock").push(event.clone());
            Ok(())
        }
    }
}
