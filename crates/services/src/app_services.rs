use std::sync::Arc;

use quiz_core::model::QuizSettings;
use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::quiz::QuizLoopService;

/// Assembles app-facing services over one bank source.
#[derive(Clone)]
pub struct AppServices {
    settings: QuizSettings,
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, settings: QuizSettings) -> Self {
        let catalog = CatalogService::new(Arc::clone(&storage.bank));
        let quiz_loop = QuizLoopService::new(settings, catalog.clone());
        Self {
            settings,
            catalog: Arc::new(catalog),
            quiz_loop: Arc::new(quiz_loop),
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
