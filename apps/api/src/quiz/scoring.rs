//! Quiz scoring — pure functions from a completed answer sequence to a recommendation.
//!
//! Scoring is commutative over the answer sequence: only the multiset of
//! `(response, category, weight)` triples matters. The caller guarantees at most
//! one answer per question; nothing here validates that.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{ScoreMap, Stream};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Yes,
    No,
}

/// One recorded quiz response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub response: Response,
    pub category: Stream,
    pub weight: u32,
}

/// Outcome of a quiz run.
///
/// `recommended_stream` is `None` when no stream scored above zero.
/// `tied_streams` is `Some` only when two or more streams share a positive top score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub scores: ScoreMap,
    pub recommended_stream: Option<Stream>,
    pub tied_streams: Option<BTreeSet<Stream>>,
    pub completed: bool,
}

impl QuizResult {
    /// The not-yet-taken shape used on first load, reset and retake.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

pub fn score(answers: &[Answer]) -> QuizResult {
    let mut scores = ScoreMap::default();
    for answer in answers {
        if answer.response == Response::Yes {
            scores.add(answer.category, answer.weight);
        }
    }

    let max_score = scores.max();
    if max_score == 0 {
        return QuizResult {
            scores,
            recommended_stream: None,
            tied_streams: None,
            completed: true,
        };
    }

    let leaders: BTreeSet<Stream> = scores
        .iter()
        .filter(|(_, v)| *v == max_score)
        .map(|(s, _)| s)
        .collect();

    // BTreeSet iterates in tie-break order, so the first leader wins.
    let recommended_stream = leaders.iter().next().copied();
    let tied_streams = (leaders.len() > 1).then_some(leaders);

    QuizResult {
        scores,
        recommended_stream,
        tied_streams,
        completed: true,
    }
}

/// Display percentage for question `index` (zero-based) out of `total`.
pub fn progress(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = 100.0 * (index as f64 + 1.0) / total as f64;
    pct.round().clamp(0.0, 100.0) as u32
}
