use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Pick `min(count, questions.len())` distinct questions uniformly at random.
///
/// The input is left untouched; each call draws fresh randomness.
#[must_use]
pub fn sample_questions(questions: &[Question], count: usize) -> Vec<Question> {
    sample_questions_with(questions, count, &mut rng())
}

/// Same as [`sample_questions`], drawing from the given generator.
///
/// Shuffles a copy of the pool (Fisher-Yates) and keeps the first `count`.
#[must_use]
pub fn sample_questions_with<R: Rng + ?Sized>(
    questions: &[Question],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool = questions.to_vec();
    pool.as_mut_slice().shuffle(rng);
    pool.truncate(count);
    pool
}
