use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::plan::{Subject, EGE_GRADE, HIGHER_EDUCATION_GRADE, OGE_GRADE};

/// A three-option multiple-choice placement question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestion {
    pub question: String,
    pub options: [String; 3],
    /// Index into `options`.
    pub correct_answer: usize,
}

impl TestQuestion {
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_answer
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// Grade range a group of questions is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBucket {
    /// Grades 1–4.
    Primary,
    /// Grades 5–8.
    Middle,
    /// Grade 9 and the OGE track.
    Oge,
    /// Grades 10–11 and the EGE track.
    Senior,
    /// Higher education.
    Higher,
}

impl GradeBucket {
    /// Bucket for a plan grade; unknown grades are treated as primary.
    pub fn for_grade(grade: u32) -> GradeBucket {
        match grade {
            5..=8 => GradeBucket::Middle,
            9 | OGE_GRADE => GradeBucket::Oge,
            10 | 11 | EGE_GRADE => GradeBucket::Senior,
            HIGHER_EDUCATION_GRADE => GradeBucket::Higher,
            _ => GradeBucket::Primary,
        }
    }
}

/// Subject id → grade bucket → questions.
pub type TestQuestionBank = HashMap<Subject, HashMap<GradeBucket, Vec<TestQuestion>>>;
