use quiz_core::model::{
    AdvancePolicy, Feedback, IgnoredReason, OptionState, SessionQuestion, Transition,
};
use services::{QuizLoopService, QuizRun, ScheduledAdvance};

use crate::vm::ResultsVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    /// Pick the option at this position in the displayed (shuffled) order.
    Choose(usize),
    Advance,
    /// Fresh sample of the same category.
    Retry,
}

/// Map a key press to an option position: `1`-`9` or a letter.
#[must_use]
pub fn option_index_for_key(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match ch {
        '1'..='9' => Some(ch as usize - '1' as usize),
        'a'..='z' => Some(ch as usize - 'a' as usize),
        'A'..='Z' => Some(ch as usize - 'A' as usize),
        _ => None,
    }
}

#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub class: &'static str,
    pub text: &'static str,
}

impl FeedbackVm {
    fn from_feedback(feedback: Feedback) -> Option<Self> {
        match feedback {
            Feedback::None => None,
            Feedback::Correct => Some(Self {
                class: "quiz-feedback quiz-feedback--correct",
                text: "Correct! Well done.",
            }),
            Feedback::Incorrect => Some(Self {
                class: "quiz-feedback quiz-feedback--incorrect",
                text: "Not quite. Keep going!",
            }),
        }
    }
}

/// What to offer once a question is locked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvanceVm {
    Hidden,
    Button(&'static str),
    Countdown(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub advance: AdvanceVm,
}

/// Everything the quiz page renders, computed in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub set_name: String,
    pub category_name: String,
    pub progress_label: String,
    pub question: Option<QuestionVm>,
    pub results: Option<ResultsVm>,
}

pub struct QuizVm {
    run: QuizRun,
}

impl QuizVm {
    #[must_use]
    pub fn new(run: QuizRun) -> Self {
        Self { run }
    }

    #[must_use]
    pub fn run(&self) -> &QuizRun {
        &self.run
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.run.session().is_locked()
    }

    pub fn choose(&mut self, quiz_loop: &QuizLoopService, index: usize) -> Transition {
        let Some(current) = self.run.session().current() else {
            return Transition::Ignored(IgnoredReason::Finished);
        };
        let Some(option) = current.options().get(index).cloned() else {
            return Transition::Ignored(IgnoredReason::UnknownOption);
        };
        quiz_loop.submit_answer(&mut self.run, &option)
    }

    pub fn advance(&mut self, quiz_loop: &QuizLoopService) -> Transition {
        quiz_loop.advance(&mut self.run)
    }

    #[must_use]
    pub fn pending_advance(&self, quiz_loop: &QuizLoopService) -> Option<ScheduledAdvance> {
        quiz_loop.pending_advance(&self.run)
    }

    pub fn fire_advance(
        &mut self,
        quiz_loop: &QuizLoopService,
        scheduled: ScheduledAdvance,
    ) -> Transition {
        quiz_loop.fire_advance(&mut self.run, scheduled)
    }

    #[must_use]
    pub fn screen(&self, policy: AdvancePolicy) -> QuizScreenVm {
        let labels = self.run.labels();
        let progress = self.run.progress();
        let session = self.run.session();

        let question = session
            .current()
            .map(|current| self.question_vm(current, policy));
        let results = session
            .is_finished()
            .then(|| ResultsVm::from(session.results()));

        QuizScreenVm {
            set_name: labels.set_name.clone(),
            category_name: labels.category_name.clone(),
            progress_label: format!("Question {} / {}", progress.position, progress.total),
            question,
            results,
        }
    }

    fn question_vm(&self, current: &SessionQuestion, policy: AdvancePolicy) -> QuestionVm {
        let session = self.run.session();
        let locked = session.is_locked();
        let options = current
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let state = session.option_state(text);
                OptionVm {
                    index,
                    letter: option_letter(index),
                    text: text.clone(),
                    state,
                    class: option_class(state),
                    disabled: locked,
                }
            })
            .collect();

        let advance = match (locked, policy.delay()) {
            (false, _) => AdvanceVm::Hidden,
            (true, Some(delay)) => AdvanceVm::Countdown(format!(
                "Next question in {} s",
                delay.as_secs()
            )),
            (true, None) if session.is_last() => AdvanceVm::Button("Show results"),
            (true, None) => AdvanceVm::Button("Next question"),
        };

        QuestionVm {
            prompt: current.prompt().to_owned(),
            options,
            feedback: FeedbackVm::from_feedback(session.feedback()),
            advance,
        }
    }
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Default => "quiz-option",
        OptionState::Correct => "quiz-option quiz-option--correct",
        OptionState::Incorrect => "quiz-option quiz-option--incorrect",
        OptionState::Disabled => "quiz-option quiz-option--disabled",
    }
}
