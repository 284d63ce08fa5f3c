use std::sync::Arc;

use quiz_core::model::QuizSettings;
use services::{AppServices, CatalogService, QuizLoopService};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> QuizSettings;
    fn catalog(&self) -> Arc<CatalogService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

impl UiApp for AppServices {
    fn settings(&self) -> QuizSettings {
        AppServices::settings(self)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        AppServices::catalog(self)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        AppServices::quiz_loop(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    settings: QuizSettings,
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            catalog: app.catalog(),
            quiz_loop: app.quiz_loop(),
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

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
