//! Static SDG knowledge quiz and server-side scoring.

use serde::Serialize;

use crate::error::CoreError;

/// A quiz question including its answer key.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Goal the question is about, or `"General"`.
    pub sdg: &'static str,
}

/// The question bank, in presentation order.
pub const QUESTIONS: [QuizQuestion; 10] = [
    QuizQuestion {
        question: "Which SDG focuses on ensuring inclusive and equitable quality education?",
        options: ["SDG 3", "SDG 4", "SDG 5", "SDG 8"],
        correct: 1,
        sdg: "SDG 4",
    },
    QuizQuestion {
        question: "What does SDG 5 primarily address?",
        options: ["Climate Action", "Gender Equality", "Clean Water", "Zero Hunger"],
        correct: 1,
        sdg: "SDG 5",
    },
    QuizQuestion {
        question: "Which SDG aims to build resilient infrastructure and promote \
                   sustainable industrialization?",
        options: ["SDG 7", "SDG 9", "SDG 11", "SDG 12"],
        correct: 1,
        sdg: "SDG 9",
    },
    QuizQuestion {
        question: "SDG 10 focuses on reducing inequalities within and among which entity?",
        options: ["Communities", "Countries", "Organizations", "Families"],
        correct: 1,
        sdg: "SDG 10",
    },
    QuizQuestion {
        question: "How many Sustainable Development Goals are there in total?",
        options: ["15", "17", "20", "25"],
        correct: 1,
        sdg: "General",
    },
    QuizQuestion {
        question: "Which SDG addresses responsible consumption and production patterns?",
        options: ["SDG 11", "SDG 12", "SDG 13", "SDG 14"],
        correct: 1,
        sdg: "SDG 12",
    },
    QuizQuestion {
        question: "What is the target year for achieving the Sustainable Development Goals?",
        options: ["2025", "2030", "2040", "2050"],
        correct: 1,
        sdg: "General",
    },
    QuizQuestion {
        question: "Which organization established the Sustainable Development Goals?",
        options: ["WHO", "UNESCO", "United Nations", "World Bank"],
        correct: 2,
        sdg: "General",
    },
    QuizQuestion {
        question: "SDG 13 primarily focuses on which global issue?",
        options: ["Poverty", "Climate Change", "Ocean Conservation", "Peace"],
        correct: 1,
        sdg: "SDG 13",
    },
    QuizQuestion {
        question: "Which SDG aims to ensure availability and sustainable management of water?",
        options: ["SDG 6", "SDG 7", "SDG 14", "SDG 15"],
        correct: 0,
        sdg: "SDG 6",
    },
];

/// A question as shown to quiz takers (no answer key).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub index: usize,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub sdg: &'static str,
}

/// Outcome of scoring one full attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: i32,
    pub total: i32,
    /// Per-question correctness, in question order.
    pub correct: Vec<bool>,
}

/// All questions with the answer key stripped.
pub fn public_questions() -> Vec<PublicQuestion> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, q)| PublicQuestion {
            index,
            question: q.question,
            options: q.options,
            sdg: q.sdg,
        })
        .collect()
}

/// Score a complete attempt: one point per correctly chosen option index.
///
/// The attempt must answer every question; an out-of-range option index
/// is a validation error rather than a wrong answer.
pub fn score_answers(answers: &[usize]) -> Result<QuizResult, CoreError> {
    if answers.len() != QUESTIONS.len() {
        return Err(CoreError::Validation(format!(
            "Expected {} answers, got {}",
            QUESTIONS.len(),
            answers.len()
        )));
    }

    let mut correct = Vec::with_capacity(QUESTIONS.len());
    for (i, (question, &answer)) in QUESTIONS.iter().zip(answers).enumerate() {
        if answer >= question.options.len() {
            return Err(CoreError::Validation(format!(
                "Answer {answer} for question {i} is out of range"
            )));
        }
        correct.push(answer == question.correct);
    }

    let score = correct.iter().filter(|c| **c).count() as i32;
    Ok(QuizResult {
        score,
        total: QUESTIONS.len() as i32,
        correct,
    })
}
