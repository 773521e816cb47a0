//! A single pass through the question set.
//!
//! Answers are built from the question currently on screen, so a run holds exactly
//! one answer per question it has advanced past. A finished run is terminal; a retake
//! starts a new `QuizRun` instead of reusing this one.

use thiserror::Error;

use crate::quiz::questions::Question;
use crate::quiz::scoring::{progress, score, Answer, QuizResult, Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    InProgress { index: usize },
    Complete(QuizResult),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizRunError {
    #[error("quiz run is already complete")]
    AlreadyComplete,

    #[error("already at the first question")]
    AtFirstQuestion,
}

#[derive(Debug, Clone)]
pub struct QuizRun {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    state: RunState,
}

impl QuizRun {
    pub fn new(questions: &[Question]) -> Self {
        let state = if questions.is_empty() {
            RunState::Complete(score(&[]))
        } else {
            RunState::InProgress { index: 0 }
        };
        Self {
            questions: questions.to_vec(),
            answers: Vec::with_capacity(questions.len()),
            state,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            RunState::InProgress { index } => self.questions.get(index),
            RunState::Complete(_) => None,
        }
    }

    /// Display percentage for the question on screen; 100 once complete.
    pub fn progress(&self) -> u32 {
        match self.state {
            RunState::InProgress { index } => progress(index, self.total()),
            RunState::Complete(_) => 100,
        }
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            RunState::Complete(result) => Some(result),
            RunState::InProgress { .. } => None,
        }
    }

    /// Record `response` for the current question. Returns the result when this
    /// was the last question.
    pub fn advance(&mut self, response: Response) -> Result<Option<QuizResult>, QuizRunError> {
        let index = match self.state {
            RunState::InProgress { index } => index,
            RunState::Complete(_) => return Err(QuizRunError::AlreadyComplete),
        };
        let question = &self.questions[index];
        self.answers.push(Answer {
            question_id: question.id,
            response,
            category: question.category,
            weight: question.weight,
        });

        if index + 1 == self.total() {
            let result = score(&self.answers);
            self.state = RunState::Complete(result.clone());
            Ok(Some(result))
        } else {
            self.state = RunState::InProgress { index: index + 1 };
            Ok(None)
        }
    }

    /// Step back one question, discarding the answer recorded for it.
    pub fn retreat(&mut self) -> Result<(), QuizRunError> {
        match self.state {
            RunState::Complete(_) => Err(QuizRunError::AlreadyComplete),
            RunState::InProgress { index: 0 } => Err(QuizRunError::AtFirstQuestion),
            RunState::InProgress { index } => {
                self.answers.pop();
                self.state = RunState::InProgress { index: index - 1 };
                Ok(())
            }
        }
    }
}
