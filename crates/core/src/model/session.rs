use crate::model::ids::SessionId;
use crate::model::question::Question;
use crate::model::results::QuizResults;

//
// ─── SESSION QUESTION ──────────────────────────────────────────────────────────
//

/// A question as it appears inside one session: options in session order plus the user's pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuestion {
    question: Question,
    shuffled_options: Vec<String>,
    selected_answer: Option<String>,
}

impl SessionQuestion {
    /// Wraps a question with an option order chosen by the caller.
    ///
    /// `shuffled_options` must be a permutation of `question.options()`; the sampler
    /// is the only production caller.
    #[must_use]
    pub fn new(question: Question, shuffled_options: Vec<String>) -> Self {
        debug_assert_eq!(question.options().len(), shuffled_options.len());
        Self {
            question,
            shuffled_options,
            selected_answer: None,
        }
    }

    /// Wraps a question keeping its original option order.
    #[must_use]
    pub fn in_bank_order(question: Question) -> Self {
        let options = question.options().to_vec();
        Self::new(question, options)
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.question.prompt()
    }

    /// Options in the order shown for this session.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.shuffled_options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.question.answer()
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Transient per-question feedback shown while a question is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

impl From<Verdict> for Feedback {
    fn from(value: Verdict) -> Self {
        match value {
            Verdict::Correct => Feedback::Correct,
            Verdict::Incorrect => Feedback::Incorrect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    AwaitingAnswer,
    Locked { verdict: Verdict },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Submit(String),
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// An answer was already recorded for the current question.
    AlreadyLocked,
    /// Advance requested before answering.
    NotLocked,
    Finished,
    /// The submitted text is not one of the current options.
    UnknownOption,
    /// A timed advance fired for a question or session that has moved on.
    StaleTicket,
}

/// What a single event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Answered(Verdict),
    Advanced { index: usize },
    Finished,
    Ignored(IgnoredReason),
}

impl Transition {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}

/// Identifies the locked question a delayed advance was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    session: SessionId,
    index: usize,
}

impl AdvanceTicket {
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Visual state of one option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Default,
    Correct,
    Incorrect,
    Disabled,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a sampled sequence of questions.
///
/// All mutation goes through `submit_answer` and `advance` (or `apply`), each of
/// which updates selection, score and state under a single `&mut` borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    id: SessionId,
    questions: Vec<SessionQuestion>,
    current: usize,
    score: usize,
    state: QuizState,
}

impl QuizSession {
    /// Starts a session at the first question. An empty sequence is finished immediately.
    #[must_use]
    pub fn new(questions: Vec<SessionQuestion>) -> Self {
        let state = if questions.is_empty() {
            QuizState::Finished
        } else {
            QuizState::AwaitingAnswer
        };
        Self {
            id: SessionId::generate(),
            questions,
            current: 0,
            score: 0,
            state,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question on screen, or `None` once the session is finished.
    #[must_use]
    pub fn current(&self) -> Option<&SessionQuestion> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self.state, QuizState::Locked { .. })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        match self.state {
            QuizState::Locked { verdict } => verdict.into(),
            QuizState::AwaitingAnswer | QuizState::Finished => Feedback::None,
        }
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.selected_answer.is_some())
            .count()
    }

    /// Record `option` for the current question and lock it.
    pub fn submit_answer(&mut self, option: &str) -> Transition {
        match self.state {
            QuizState::Locked { .. } => return Transition::Ignored(IgnoredReason::AlreadyLocked),
            QuizState::Finished => return Transition::Ignored(IgnoredReason::Finished),
            QuizState::AwaitingAnswer => {}
        }
        let Some(question) = self.questions.get_mut(self.current) else {
            return Transition::Ignored(IgnoredReason::Finished);
        };
        if !question.shuffled_options.iter().any(|o| o == option) {
            return Transition::Ignored(IgnoredReason::UnknownOption);
        }

        let verdict = if question.question.is_correct(option) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        question.selected_answer = Some(option.to_owned());
        if verdict == Verdict::Correct {
            self.score += 1;
        }
        self.state = QuizState::Locked { verdict };
        Transition::Answered(verdict)
    }

    /// Leave the locked question: move to the next one or finish.
    pub fn advance(&mut self) -> Transition {
        match self.state {
            QuizState::AwaitingAnswer => Transition::Ignored(IgnoredReason::NotLocked),
            QuizState::Finished => Transition::Ignored(IgnoredReason::Finished),
            QuizState::Locked { .. } if self.is_last() => {
                self.state = QuizState::Finished;
                Transition::Finished
            }
            QuizState::Locked { .. } => {
                self.current += 1;
                self.state = QuizState::AwaitingAnswer;
                Transition::Advanced {
                    index: self.current,
                }
            }
        }
    }

    pub fn apply(&mut self, event: QuizEvent) -> Transition {
        match event {
            QuizEvent::Submit(option) => self.submit_answer(&option),
            QuizEvent::Advance => self.advance(),
        }
    }

    /// By-value form of [`QuizSession::apply`]: `(session, event) -> session`.
    #[must_use]
    pub fn reduce(mut self, event: QuizEvent) -> Self {
        // Ignored events leave the session unchanged, so the outcome carries nothing here.
        let _ = self.apply(event);
        self
    }

    /// Ticket for a delayed advance of the current locked question.
    #[must_use]
    pub fn advance_ticket(&self) -> Option<AdvanceTicket> {
        self.is_locked().then_some(AdvanceTicket {
            session: self.id,
            index: self.current,
        })
    }

    /// Advance only if `ticket` still refers to this session's current locked question.
    pub fn advance_with(&mut self, ticket: AdvanceTicket) -> Transition {
        if ticket.session != self.id || ticket.index != self.current || !self.is_locked() {
            return Transition::Ignored(IgnoredReason::StaleTicket);
        }
        self.advance()
    }

    /// How `option` of the current question should be drawn.
    #[must_use]
    pub fn option_state(&self, option: &str) -> OptionState {
        let Some(question) = self.current() else {
            return OptionState::Disabled;
        };
        if !self.is_locked() {
            return OptionState::Default;
        }
        if question.answer() == option {
            OptionState::Correct
        } else if question.selected_answer() == Some(option) {
            OptionState::Incorrect
        } else {
            OptionState::Disabled
        }
    }

    #[must_use]
    pub fn results(&self) -> QuizResults {
        QuizResults::new(self.score, self.questions.len())
    }
}
