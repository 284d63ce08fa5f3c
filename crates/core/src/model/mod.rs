mod bank;
mod ids;
mod question;
mod results;
mod session;
mod settings;

pub use ids::{CategoryId, SessionId, SetId};

pub use bank::{BankError, Category, QuestionBank, QuestionSet};
pub use question::{Question, QuestionError};
pub use results::{QuizResults, ResultTier};
pub use session::{
    AdvanceTicket, Feedback, IgnoredReason, OptionState, QuizEvent, QuizSession, QuizState,
    SessionQuestion, Transition, Verdict,
};
pub use settings::{AdvancePolicy, QuizSettings, SettingsError};
