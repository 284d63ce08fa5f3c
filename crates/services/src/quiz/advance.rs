use std::time::Duration;

use quiz_core::model::AdvanceTicket;

/// A timed advance the caller should run after `delay`, then hand back to
/// [`QuizLoopService::fire_advance`](super::QuizLoopService::fire_advance).
///
/// The ticket pins the session and question index, so firing late is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub ticket: AdvanceTicket,
    pub delay: Duration,
}
