use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("quiz size must be > 0")]
    InvalidQuizSize,

    #[error("auto-advance delay must be between 1 and 60 seconds")]
    InvalidAdvanceDelay,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// How a locked question moves on to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancePolicy {
    /// Wait for the user to press "Next".
    #[default]
    Manual,
    /// Advance on its own once `delay` has elapsed after answering.
    Timed { delay: Duration },
}

impl AdvancePolicy {
    pub const MIN_DELAY: Duration = Duration::from_secs(1);
    pub const MAX_DELAY: Duration = Duration::from_secs(60);
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Timed policy with the given delay in whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidAdvanceDelay` outside 1..=60 seconds.
    pub fn timed_secs(secs: u64) -> Result<Self, SettingsError> {
        let delay = Duration::from_secs(secs);
        if !(Self::MIN_DELAY..=Self::MAX_DELAY).contains(&delay) {
            return Err(SettingsError::InvalidAdvanceDelay);
        }
        Ok(Self::Timed { delay })
    }

    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        match self {
            AdvancePolicy::Manual => None,
            AdvancePolicy::Timed { delay } => Some(*delay),
        }
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        matches!(self, AdvancePolicy::Timed { .. })
    }
}

/// Configuration for quiz sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    quiz_size: u32,
    advance: AdvancePolicy,
}

impl QuizSettings {
    /// Number of questions drawn per session unless configured otherwise.
    pub const DEFAULT_QUIZ_SIZE: u32 = 20;

    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuizSize` if `quiz_size` is zero and
    /// `SettingsError::InvalidAdvanceDelay` if a timed delay is out of range.
    pub fn new(quiz_size: u32, advance: AdvancePolicy) -> Result<Self, SettingsError> {
        if quiz_size == 0 {
            return Err(SettingsError::InvalidQuizSize);
        }
        if let AdvancePolicy::Timed { delay } = advance {
            if !(AdvancePolicy::MIN_DELAY..=AdvancePolicy::MAX_DELAY).contains(&delay) {
                return Err(SettingsError::InvalidAdvanceDelay);
            }
        }
        Ok(Self { quiz_size, advance })
    }

    #[must_use]
    pub fn quiz_size(&self) -> u32 {
        self.quiz_size
    }

    /// The cap as a `usize`, for slicing pools.
    #[must_use]
    pub fn cap(&self) -> usize {
        usize::try_from(self.quiz_size).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn advance(&self) -> AdvancePolicy {
        self.advance
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            quiz_size: Self::DEFAULT_QUIZ_SIZE,
            advance: AdvancePolicy::Manual,
        }
    }
}
