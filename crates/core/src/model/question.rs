use std::collections::HashSet;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least {min} options, got {len}")]
    TooFewOptions { min: usize, len: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("answer {answer:?} does not match any option")]
    AnswerNotInOptions { answer: String },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question as loaded from the bank.
///
/// `answer` is compared to options by exact string equality. No trimming or
/// case folding happens anywhere, so the bank has to be byte-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Minimum number of choices a question must offer.
    pub const MIN_OPTIONS: usize = 2;

    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are fewer than
    /// `MIN_OPTIONS` options, an option repeats, or `answer` is not one of the options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = Self::from_unchecked(prompt, options, answer);
        question.validate()?;
        Ok(question)
    }

    /// Builds a question without validating it.
    ///
    /// Loaders running in lenient mode use this for data they only warn about.
    #[must_use]
    pub fn from_unchecked(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Checks the invariants enforced by `new`.
    ///
    /// # Errors
    ///
    /// See [`Question::new`].
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < Self::MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                min: Self::MIN_OPTIONS,
                len: self.options.len(),
            });
        }
        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }
        if !self.has_option(&self.answer) {
            return Err(QuestionError::AnswerNotInOptions {
                answer: self.answer.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Exact-match correctness check.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
