//! Service container for dependency injection
//!
//! Wires up services with their dependencies.

use std::sync::Arc;

use crate::application::services::TreeService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, RealStdin, StdinReader};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Standard input abstraction
    pub stdin: Arc<dyn StdinReader>,

    /// Tree renderer configured from settings
    pub tree: TreeService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(RealStdin))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        stdin: Arc<dyn StdinReader>,
    ) -> InfraResult<Self> {
        let tree = TreeService::from_settings(&settings)?;
        let settings = Arc::new(settings);

        Ok(Self {
            settings,
            fs,
            stdin,
            tree,
        })
    }
}
