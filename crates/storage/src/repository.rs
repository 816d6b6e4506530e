use async_trait::async_trait;
use campus_core::model::{Course, CourseId, Student};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid catalog data: {0}")]
    Invalid(String),
}

/// Read-only contract for the course catalog.
///
/// The services layer makes no assumption about where the catalog comes
/// from; the in-memory implementation below holds authored demo data.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch the signed-in student.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no student is configured.
    async fn student(&self) -> Result<Student, StorageError>;

    /// List every course in authored order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    async fn list_courses(&self) -> Result<Vec<Course>, StorageError>;

    /// Fetch a course by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_course(&self, id: &CourseId) -> Result<Course, StorageError>;
}

/// Simple in-memory catalog for demos and tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    student: Arc<Mutex<Option<Student>>>,
    courses: Arc<Mutex<Vec<Course>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signed-in student.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn set_student(&self, student: Student) -> Result<(), StorageError> {
        let mut guard = self
            .student
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(student);
        Ok(())
    }

    /// Insert a course, replacing any course with the same id in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn upsert_course(&self, course: Course) -> Result<(), StorageError> {
        let mut guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.iter_mut().find(|existing| existing.id() == course.id()) {
            Some(slot) => *slot = course,
            None => guard.push(course),
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn student(&self) -> Result<Student, StorageError> {
        let guard = self
            .student
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clone().ok_or(StorageError::NotFound)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, StorageError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|course| course.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

/// Aggregates catalog access behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            catalog: Arc::new(InMemoryRepository::new()),
        }
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        Self {
            catalog: Arc::new(repo),
        }
    }
}
