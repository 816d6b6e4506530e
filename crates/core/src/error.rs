use thiserror::Error;

use crate::model::{CourseError, ItemError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error(transparent)]
    Course(#[from] CourseError),
}
