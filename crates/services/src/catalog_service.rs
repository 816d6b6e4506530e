use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use campus_core::model::{Course, CourseId, CourseModule, EnrollmentStatus, ModuleId, TopicId};
use storage::repository::{CatalogRepository, StorageError};

use crate::Clock;
use crate::error::CatalogError;
use crate::views::{
    CourseOverview, CurriculumOutline, DashboardView, TopicView, build_course_overview,
    build_dashboard, build_outline, build_topic_view,
};

/// Presentation-facing catalog facade that hides the repository and time from hosts.
///
/// This service owns:
/// - the time source (`Clock`)
/// - repository access
///
/// Every view is evaluated against a single `now` read once per call.
#[derive(Clone)]
pub struct CatalogService {
    clock: Clock,
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { clock, catalog }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Dashboard of courses with the given enrollment status.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` on repository failures.
    pub async fn dashboard(&self, filter: EnrollmentStatus) -> Result<DashboardView, CatalogError> {
        let now = self.clock.now();
        let student = self.catalog.student().await?;
        let courses = self.catalog.list_courses().await?;
        debug!(filter = filter.as_str(), courses = courses.len(), "building dashboard");
        Ok(build_dashboard(&student, &courses, filter, now))
    }

    /// Overview page for one course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CourseNotFound` for unknown ids.
    pub async fn course_overview(&self, id: &CourseId) -> Result<CourseOverview, CatalogError> {
        let now = self.clock.now();
        let course = self.load_course(id).await?;
        Ok(build_course_overview(&course, now))
    }

    /// Module and topic navigation for one course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CourseNotFound` for unknown ids.
    pub async fn outline(&self, id: &CourseId) -> Result<CurriculumOutline, CatalogError> {
        let course = self.load_course(id).await?;
        Ok(build_outline(&course))
    }

    /// Rendered topic page.
    ///
    /// Without a module the student's current module is used (falling back to
    /// the first one); without a topic, the module's first topic.
    ///
    /// # Errors
    ///
    /// Returns a not-found `CatalogError` when the course, module or topic
    /// cannot be resolved.
    pub async fn topic_view(
        &self,
        course_id: &CourseId,
        module_id: Option<&ModuleId>,
        topic_id: Option<&TopicId>,
    ) -> Result<TopicView, CatalogError> {
        let now = self.clock.now();
        let course = self.load_course(course_id).await?;
        let module = resolve_module(&course, module_id)?;

        let topic = match topic_id {
            Some(id) => module.topic(id).ok_or_else(|| {
                warn!(module = %module.id(), topic = %id, "topic not found");
                CatalogError::TopicNotFound {
                    module: module.id().clone(),
                    topic: id.clone(),
                }
            })?,
            None => module
                .first_topic()
                .ok_or_else(|| CatalogError::EmptyModule(module.id().clone()))?,
        };

        debug!(
            course = %course.id(),
            module = %module.id(),
            topic = %topic.id(),
            "building topic view"
        );
        Ok(build_topic_view(&course, module, topic, now))
    }

    async fn load_course(&self, id: &CourseId) -> Result<Course, CatalogError> {
        match self.catalog.get_course(id).await {
            Ok(course) => Ok(course),
            Err(StorageError::NotFound) => {
                warn!(course = %id, "course not found");
                Err(CatalogError::CourseNotFound(id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn resolve_module<'a>(
    course: &'a Course,
    requested: Option<&ModuleId>,
) -> Result<&'a CourseModule, CatalogError> {
    let not_found = |module: &ModuleId| {
        warn!(course = %course.id(), module = %module, "module not found");
        CatalogError::ModuleNotFound {
            course: course.id().clone(),
            module: module.clone(),
        }
    };

    match requested {
        Some(id) => course.module(id).ok_or_else(|| not_found(id)),
        None => {
            let current = &course.position().module_id;
            course
                .module(current)
                .or_else(|| course.modules().first())
                .ok_or_else(|| not_found(current))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::time::fixed_now;
    use storage::demo::demo_catalog;

    fn service() -> CatalogService {
        let now = fixed_now();
        CatalogService::new(Clock::fixed(now), Arc::new(demo_catalog(now).unwrap()))
    }

    #[tokio::test]
    async fn topic_view_defaults_to_current_module() {
        let view = service()
            .topic_view(&CourseId::new("1"), None, None)
            .await
            .unwrap();
        assert_eq!(view.module_id, ModuleId::new("3"));
        assert_eq!(view.title, "Custom Hooks and Context API");
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let err = service()
            .course_overview(&CourseId::new("99"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::CourseNotFound(ref id) if id.as_str() == "99"));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unknown_topic_is_not_found() {
        let err = service()
            .topic_view(
                &CourseId::new("1"),
                Some(&ModuleId::new("1")),
                Some(&TopicId::new("7")),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::TopicNotFound { .. }));
    }

    #[tokio::test]
    async fn course_without_modules_has_no_topic_view() {
        let err = service()
            .topic_view(&CourseId::new("3"), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ModuleNotFound { .. }));
    }
}
