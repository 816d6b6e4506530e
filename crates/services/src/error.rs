//! Shared error types for the services crate.

use thiserror::Error;

use campus_core::model::{CourseId, ModuleId, TopicId};
use storage::repository::StorageError;

/// Errors emitted by `CatalogService`.
///
/// The not-found variants are the only conditions a host needs to render a
/// fallback page for.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("module {module} not found in course {course}")]
    ModuleNotFound { course: CourseId, module: ModuleId },
    #[error("topic {topic} not found in module {module}")]
    TopicNotFound { module: ModuleId, topic: TopicId },
    #[error("module {0} has no topics")]
    EmptyModule(ModuleId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CourseNotFound(_)
                | Self::ModuleNotFound { .. }
                | Self::TopicNotFound { .. }
                | Self::EmptyModule(_)
                | Self::Storage(StorageError::NotFound)
        )
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
