use std::sync::Arc;

use crate::config::Config;
use crate::models::content::SiteContent;
use crate::store::{ContactStore, EventStore, Stores};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub events: Arc<dyn EventStore>,
    pub contacts: Arc<dyn ContactStore>,
    pub content: Arc<SiteContent>,
}

impl AppState {
    pub fn new(config: Config, stores: Stores, content: SiteContent) -> Self {
        Self {
            config,
            events: stores.events,
            contacts: stores.contacts,
            content: Arc::new(content),
        }
    }
}
