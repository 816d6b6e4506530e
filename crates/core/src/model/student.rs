use crate::model::ids::StudentId;

/// The signed-in learner. Only used for greetings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
}

impl Student {
    #[must_use]
    pub fn new(id: StudentId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
