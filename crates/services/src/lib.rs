#![forbid(unsafe_code)]

pub mod app_services;
pub mod availability;
pub mod catalog_service;
pub mod error;
pub mod expander;
pub mod presenter;
pub mod time_fmt;
pub mod views;

pub use campus_core::Clock;

pub use app_services::AppServices;
pub use availability::{ActionLabel, ItemAction, JOIN_WINDOW_MINUTES, evaluate_action};
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, CatalogError};
pub use expander::{DisplayItem, ExpandSource, TopicProgress, expand_items};
pub use presenter::{
    Badge, BadgeTone, RECORDING_PENDING_NOTE, StatusDescriptor, countdown_label, describe_status,
    display_title, present_status,
};
