use std::sync::Arc;

use pholio_repository::Repository;
use pholio_repository_memory::MemoryRepository;

use crate::config::RepositoryConfig;
use crate::error::ServerError;

/// Create the repository backend named in the configuration.
///
/// Only the in-memory backend is compiled into this binary; an unknown
/// backend name is a configuration error.
pub fn create_repository(config: &RepositoryConfig) -> Result<Arc<dyn Repository>, ServerError> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryRepository::new())),
        other => Err(ServerError::Config(format!(
            "unknown repository backend: {other}"
        ))),
    }
}
