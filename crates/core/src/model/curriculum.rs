use crate::model::ids::{ItemId, ModuleId, TopicId};
use crate::model::item::LearningItem;

/// A unit within a module containing learning items, in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    name: String,
    description: String,
    items: Vec<LearningItem>,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: TopicId,
        name: impl Into<String>,
        description: impl Into<String>,
        items: Vec<LearningItem>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            items,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn items(&self) -> &[LearningItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&LearningItem> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// A top-level curriculum unit. Named `CourseModule` to stay clear of Rust's `mod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseModule {
    id: ModuleId,
    name: String,
    topics: Vec<Topic>,
}

impl CourseModule {
    #[must_use]
    pub fn new(id: ModuleId, name: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            id,
            name: name.into(),
            topics,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }

    #[must_use]
    pub fn first_topic(&self) -> Option<&Topic> {
        self.topics.first()
    }
}
