use serde::Serialize;

use crate::models::Stream;

/// A yes/no aptitude question. A "yes" adds `weight` to `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    pub category: Stream,
    pub weight: u32,
}

const fn q(id: u32, question: &'static str, category: Stream, weight: u32) -> Question {
    Question {
        id,
        question,
        category,
        weight,
    }
}

#[rustfmt::skip]
static QUESTION_BANK: [Question; 10] = [
    q(1, "Do you enjoy solving mathematical problems and equations?", Stream::Science, 2),
    q(2, "Are you interested in understanding how things work scientifically?", Stream::Science, 2),
    q(3, "Do you like working with numbers and financial calculations?", Stream::Commerce, 2),
    q(4, "Are you interested in business, trade, and economics?", Stream::Commerce, 2),
    q(5, "Do you enjoy reading, writing, and creative expression?", Stream::Arts, 2),
    q(6, "Are you interested in history, literature, and social issues?", Stream::Arts, 2),
    q(7, "Do you enjoy conducting experiments and research?", Stream::Science, 1),
    q(8, "Are you good at managing money and budgets?", Stream::Commerce, 1),
    q(9, "Do you like to express yourself through art, music, or writing?", Stream::Arts, 1),
    q(10, "Are you interested in technology and innovation?", Stream::Science, 1),
];

/// The active question set, in presentation order.
pub fn question_bank() -> &'static [Question] {
    &QUESTION_BANK
}
