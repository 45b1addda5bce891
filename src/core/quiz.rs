// Question-by-question answer collection with paging.

use super::constants::{LIKERT_MAX, LIKERT_MIN, QUESTIONS_PER_ABILITY};
use rand::Rng;
use std::ops::Range;

pub const QUESTIONS_PER_PAGE: usize = QUESTIONS_PER_ABILITY;
pub const ENCOURAGEMENTS: [&str; 5] = ["Great!", "Good job!", "GOOD!", "Keep going!", "Awesome!"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuizError {
    #[error("question {index} does not exist ({count} questions)")]
    NoSuchQuestion { index: usize, count: usize },
    #[error("answer {value} is outside 1..=5")]
    InvalidAnswer { value: u8 },
    #[error("{missing} questions are still unanswered")]
    Incomplete { missing: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub answered: usize,
    /// Answered count just reached a multiple of five.
    pub milestone: bool,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    answers: Vec<Option<u8>>,
    page: usize,
}

impl QuizSession {
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![None; question_count],
            page: 0,
        }
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answer_at(&self, index: usize) -> Option<u8> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn answer(&mut self, index: usize, value: u8) -> Result<AnswerOutcome, QuizError> {
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return Err(QuizError::InvalidAnswer { value });
        }
        let count = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::NoSuchQuestion { index, count })?;
        *slot = Some(value);
        let answered = self.answered();
        Ok(AnswerOutcome {
            answered,
            milestone: answered % QUESTIONS_PER_PAGE == 0,
        })
    }

    pub fn progress_percent(&self) -> f32 {
        if self.answers.is_empty() {
            return 0.0;
        }
        self.answered() as f32 / self.answers.len() as f32 * 100.0
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.answers.len().div_ceil(QUESTIONS_PER_PAGE)
    }

    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= self.page_count()
    }

    /// Question indices shown on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page * QUESTIONS_PER_PAGE;
        let end = (start + QUESTIONS_PER_PAGE).min(self.answers.len());
        start..end
    }

    pub fn next_page(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn complete(&self) -> Result<Vec<u8>, QuizError> {
        let missing = self.answers.len() - self.answered();
        if missing > 0 {
            return Err(QuizError::Incomplete { missing });
        }
        Ok(self.answers.iter().flatten().copied().collect())
    }

    /// Developer shortcut: answer every question at random.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for a in &mut self.answers {
            *a = Some(rng.gen_range(LIKERT_MIN..=LIKERT_MAX));
        }
    }

    pub fn reset(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.page = 0;
    }
}

pub fn encouragement<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ENCOURAGEMENTS[rng.gen_range(0..ENCOURAGEMENTS.len())]
}

/// Three uppercase base-36 characters.
pub fn random_user_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    (0..3)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
