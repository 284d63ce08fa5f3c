#![forbid(unsafe_code)]

pub mod model;
pub mod sampler;

pub use model::{
    AdvancePolicy, AdvanceTicket, BankError, Category, CategoryId, Feedback, IgnoredReason,
    OptionState, Question, QuestionBank, QuestionError, QuestionSet, QuizEvent, QuizResults,
    QuizSession, QuizSettings, QuizState, ResultTier, SessionId, SessionQuestion, SetId,
    SettingsError, Transition, Verdict,
};
