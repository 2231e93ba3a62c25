use std::sync::Arc;

use phrasebook_config::Config;
use phrasebook_core::PhraseDictionary;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Loaded once at start-up, shared read-only with every translator
    pub dictionary: Arc<PhraseDictionary>,
}

impl AppState {
    pub fn new(config: Config, dictionary: PhraseDictionary) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            dictionary: Arc::new(dictionary),
        }
    }
}
