use quiz_core::model::{CategoryId, QuizSettings, SetId, Transition};
use quiz_core::sampler;

use crate::catalog_service::CatalogService;
use crate::error::{CatalogError, QuizError};
use storage::repository::StorageError;

use super::advance::ScheduledAdvance;
use super::run::{QuizRun, RunLabels};

/// Orchestrates session start, answering, and advancing.
#[derive(Clone)]
pub struct QuizLoopService {
    settings: QuizSettings,
    catalog: CatalogService,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(settings: QuizSettings, catalog: CatalogService) -> Self {
        Self { settings, catalog }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Start a new quiz with a fresh random sample of the category.
    ///
    /// An empty category yields a run that is already complete.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Catalog` for unknown ids or storage failures.
    pub async fn start_session(
        &self,
        set: SetId,
        category: CategoryId,
    ) -> Result<QuizRun, QuizError> {
        let set_record = self.catalog.get_set(set).await?;
        let pool = self
            .catalog
            .bank()
            .get_category(set, category)
            .await
            .map_err(|err| match err {
                StorageError::NotFound => CatalogError::UnknownCategory { set, category },
                other => other.into(),
            })?;

        let session = sampler::start_session(pool.questions(), self.settings.cap(), &mut rand::rng());
        tracing::debug!(
            set = %set_record.name,
            category = pool.name(),
            pool = pool.len(),
            drawn = session.len(),
            session = %session.id(),
            "quiz session started"
        );

        let labels = RunLabels {
            set_id: set,
            set_name: set_record.name,
            category_id: category,
            category_name: pool.name().to_owned(),
        };
        Ok(QuizRun::new(labels, pool.len(), session))
    }

    /// Draw a new sample for the same category.
    ///
    /// # Errors
    ///
    /// See [`QuizLoopService::start_session`].
    pub async fn restart(&self, run: &QuizRun) -> Result<QuizRun, QuizError> {
        let labels = run.labels();
        self.start_session(labels.set_id, labels.category_id).await
    }

    /// Submit `option` for the current question.
    pub fn submit_answer(&self, run: &mut QuizRun, option: &str) -> Transition {
        let transition = run.session_mut().submit_answer(option);
        tracing::trace!(?transition, "answer submitted");
        transition
    }

    /// Move past the locked question.
    pub fn advance(&self, run: &mut QuizRun) -> Transition {
        let transition = run.session_mut().advance();
        self.log_if_finished(run, transition);
        transition
    }

    /// The timed advance to schedule right now, if the policy is timed and the run is locked.
    #[must_use]
    pub fn pending_advance(&self, run: &QuizRun) -> Option<ScheduledAdvance> {
        let delay = self.settings.advance().delay()?;
        let ticket = run.session().advance_ticket()?;
        Some(ScheduledAdvance { ticket, delay })
    }

    /// Apply a timed advance once its delay elapsed. Stale schedules are ignored.
    pub fn fire_advance(&self, run: &mut QuizRun, scheduled: ScheduledAdvance) -> Transition {
        let transition = run.session_mut().advance_with(scheduled.ticket);
        if !transition.is_applied() {
            tracing::debug!(?transition, "timed advance skipped");
        }
        self.log_if_finished(run, transition);
        transition
    }

    #[allow(clippy::unused_self)]
    fn log_if_finished(&self, run: &QuizRun, transition: Transition) {
        if transition == Transition::Finished {
            let results = run.session().results();
            tracing::info!(
                category = %run.labels().category_name,
                score = results.score(),
                total = results.total(),
                percentage = ?results.percentage(),
                "quiz finished"
            );
        }
    }
}
