//! Draws the randomized question sequence for a session.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Question, QuizSession, SessionQuestion};

/// Draw `min(cap, pool.len())` questions without replacement and shuffle each one's options.
///
/// Both shuffles are Fisher–Yates (`SliceRandom::shuffle`) over copies, so `pool` is untouched.
pub fn sample<R: Rng + ?Sized>(pool: &[Question], cap: usize, rng: &mut R) -> Vec<SessionQuestion> {
    let size = cap.min(pool.len());
    let mut drawn = pool.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(size);

    drawn
        .into_iter()
        .map(|question| {
            let mut options = question.options().to_vec();
            options.shuffle(rng);
            SessionQuestion::new(question, options)
        })
        .collect()
}

/// [`sample`] using the thread-local generator.
#[must_use]
pub fn sample_with_thread_rng(pool: &[Question], cap: usize) -> Vec<SessionQuestion> {
    sample(pool, cap, &mut rand::rng())
}

/// Sample and wrap the result in a fresh session.
pub fn start_session<R: Rng + ?Sized>(pool: &[Question], cap: usize, rng: &mut R) -> QuizSession {
    QuizSession::new(sample(pool, cap, rng))
}
