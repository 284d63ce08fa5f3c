mod advance;
mod progress;
mod run;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use advance::ScheduledAdvance;
pub use progress::QuizProgress;
pub use run::{QuizRun, RunLabels};
pub use workflow::QuizLoopService;
