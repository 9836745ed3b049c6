use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Event, EventFields};
use crate::notify::{Notification, Notifier};
use crate::store::EventStore;
use crate::utils::error::AppError;

/// Client-side view of the `events` collection.
///
/// Every successful write is followed by a full re-fetch, so the cached list
/// always mirrors what the store returned last. Failures leave the cache as
/// it was.
pub struct EventRepository {
    store: Arc<dyn EventStore>,
    notifier: Arc<dyn Notifier>,
    cache: RwLock<Vec<Event>>,
}

impl EventRepository {
    pub fn new(store: Arc<dyn EventStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            cache: RwLock::new(Vec::new()),
        }
    }

    pub async fn events(&self) -> Vec<Event> {
        self.cache.read().await.clone()
    }

    pub async fn fetch_all(&self) -> Result<Vec<Event>, AppError> {
        match self.store.list().await {
            Ok(events) => {
                debug!(count = events.len(), "Fetched events");
                *self.cache.write().await = events.clone();
                Ok(events)
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::error("Error fetching events", e.public_message()));
                Err(e)
            }
        }
    }

    pub async fn create(&self, fields: EventFields) -> Result<(), AppError> {
        let result = self.store.insert(&fields).await;
        self.after_write(result.map(|e| e.id), "Error creating event", "Event created successfully!")
            .await
    }

    pub async fn update(&self, id: &str, fields: EventFields) -> Result<(), AppError> {
        let result = self.store.update(id, &fields).await;
        self.after_write(result.map(|e| e.id), "Error updating event", "Event updated successfully!")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = self.store.delete(id).await.map(|_| id.to_string());
        self.after_write(result, "Error deleting event", "Event deleted successfully!")
            .await
    }

    async fn after_write(
        &self,
        result: Result<String, AppError>,
        failure_title: &str,
        success_title: &str,
    ) -> Result<(), AppError> {
        match result {
            Ok(id) => {
                info!(event_id = %id, "{}", success_title);
                self.notifier.notify(Notification::success(success_title));
                // A failed refresh has already been reported; the write itself stands.
                let _ = self.fetch_all().await;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::error(failure_title, e.public_message()));
                Err(e)
            }
        }
    }
}
