use quiz_core::model::{CategoryId, QuizSession, SetId};

use super::progress::QuizProgress;

/// Names shown around the quiz (breadcrumb, results heading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLabels {
    pub set_id: SetId,
    pub set_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
}

/// A live quiz: the session state machine plus where its questions came from.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRun {
    labels: RunLabels,
    pool_size: usize,
    session: QuizSession,
}

impl QuizRun {
    pub(crate) fn new(labels: RunLabels, pool_size: usize, session: QuizSession) -> Self {
        Self {
            labels,
            pool_size,
            session,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &RunLabels {
        &self.labels
    }

    /// Size of the category before sampling.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.session.len();
        QuizProgress {
            position: if total == 0 {
                0
            } else {
                self.session.current_index() + 1
            },
            total,
            answered: self.session.answered_count(),
            score: self.session.score(),
            is_complete: self.session.is_finished(),
        }
    }
}
