#![forbid(unsafe_code)]

pub mod demo;
pub mod repository;

pub use repository::{CatalogRepository, InMemoryRepository, Storage, StorageError};
