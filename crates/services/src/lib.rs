#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod quiz;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{CatalogError, QuizError};
pub use quiz::{QuizLoopService, QuizProgress, QuizRun, RunLabels, ScheduledAdvance};

// Listing rows returned by `CatalogService`.
pub use storage::repository::{CategoryRecord, SetRecord};
