use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use quiz_core::model::{AdvancePolicy, QuizSettings, SettingsError};
use storage::ValidationPolicy;

/// CLI arguments for the quiz app
#[derive(Parser, Debug)]
#[command(name = "quiz")]
#[command(version, about = "Multiple-choice quiz over a JSON question bank")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = r#"
Pick a question set, then a category, and answer a random sample of its
questions. Without --bank the bundled sample bank is used.

A bank is either one JSON file shaped
  { "<set>": { "<category>": [ { "question", "options", "answer" } ] } }
or a directory of <set>.json files, each shaped { "<category>": [ ... ] }.

Example:
  quiz --bank ./banks --quiz-size 10 --auto-advance-secs 2
  quiz check --bank ./banks --strict
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub ui: UiArgs,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// The subcommand to run; bare `quiz` launches the UI.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Ui(self.ui))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the desktop quiz (default)
    Ui(UiArgs),
    /// Load a bank and print its validation report
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct UiArgs {
    /// Question bank file or directory
    #[arg(long, env = "QUIZ_BANK", value_name = "PATH")]
    pub bank: Option<PathBuf>,

    /// Questions drawn per quiz
    #[arg(long, env = "QUIZ_SIZE", default_value_t = QuizSettings::DEFAULT_QUIZ_SIZE)]
    pub quiz_size: u32,

    /// Advance automatically this many seconds after answering (1-60)
    #[arg(long, env = "QUIZ_AUTO_ADVANCE_SECS", value_name = "SECS")]
    pub auto_advance_secs: Option<u64>,

    /// Refuse to start if any question is invalid
    #[arg(long)]
    pub strict: bool,
}

impl UiArgs {
    /// # Errors
    ///
    /// Returns `SettingsError` for a zero quiz size or an out-of-range delay.
    pub fn settings(&self) -> Result<QuizSettings, SettingsError> {
        let advance = match self.auto_advance_secs {
            Some(secs) => AdvancePolicy::timed_secs(secs)?,
            None => AdvancePolicy::Manual,
        };
        QuizSettings::new(self.quiz_size, advance)
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        policy(self.strict)
    }
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Question bank file or directory
    #[arg(long, env = "QUIZ_BANK", value_name = "PATH")]
    pub bank: PathBuf,

    /// Fail on the first invalid question instead of listing all of them
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        policy(self.strict)
    }
}

fn policy(strict: bool) -> ValidationPolicy {
    if strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Lenient
    }
}
