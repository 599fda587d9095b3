use std::sync::Arc;

use common::storage::KeyValueStore;
use common::storage::filesystem::FilesystemKvStore;

use crate::config::AppConfig;
use crate::describe::{DescriptionGenerator, HttpDescriptionGenerator};
use crate::error::Result;
use crate::password::PasswordHashing;
use crate::registry::Registry;
use crate::session::SessionManager;
use crate::store::PersistentStore;
use crate::views::{Navigation, navigate};

/// Everything a front end needs, passed explicitly to each command.
pub struct AppState {
    pub registry: Registry,
    pub session: SessionManager,
    pub describer: Option<Arc<dyn DescriptionGenerator>>,
}

impl AppState {
    /// Open the filesystem store configured in `config.storage`.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let kv = FilesystemKvStore::new(
            config.storage.data_dir.clone(),
            config.storage.max_value_bytes,
        )?;
        Self::with_store(Arc::new(kv), config)
    }

    /// Load the registry and restore the session from `kv`.
    pub fn with_store(kv: Arc<dyn KeyValueStore>, config: &AppConfig) -> Result<Self> {
        let store = PersistentStore::new(kv);
        let hashing = PasswordHashing::new(&config.auth)?;

        let registry = Registry::open(store.clone(), &config.seed, hashing)?;
        let session = SessionManager::restore(store)?;
        let describer = HttpDescriptionGenerator::from_config(&config.describe)
            .map(|g| Arc::new(g) as Arc<dyn DescriptionGenerator>);

        Ok(Self {
            registry,
            session,
            describer,
        })
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        navigate(path, self.session.current())
    }
}
