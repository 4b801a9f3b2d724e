use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::plan::Subject;
use crate::error::CatalogError;
use crate::placement::question::{GradeBucket, TestQuestion, TestQuestionBank};

const EMBEDDED_TEST_QUESTIONS: &str = include_str!("../../data/test_questions.json");

/// Parse a question bank and check every answer index points at an option.
pub fn load_test_questions(json: &str) -> Result<TestQuestionBank, CatalogError> {
    let bank = serde_json::from_str::<TestQuestionBank>(json)
        .map_err(|e| CatalogError::from(e).with_context("test questions"))?;

    for (subject, buckets) in &bank {
        for (bucket, questions) in buckets {
            if let Some(bad) = questions.iter().find(|q| q.correct_option().is_none()) {
                return Err(CatalogError::new(
                    format!("Answer index {} out of range", bad.correct_answer),
                    "validation"
                ).with_context(format!("{} / {:?}: {}", subject, bucket, bad.question)));
            }
        }
    }

    Ok(bank)
}

fn load_embedded_test_questions() -> TestQuestionBank {
    match load_test_questions(EMBEDDED_TEST_QUESTIONS) {
        Ok(bank) => bank,
        Err(e) => {
            tracing::error!(error = %e, "Embedded test questions are unreadable");
            TestQuestionBank::new()
        }
    }
}

lazy_static! {
    pub static ref COURSE_TEST_QUESTIONS: TestQuestionBank = load_embedded_test_questions();
}

/// Questions for one subject and bucket, empty if there are none.
pub fn questions_in(bank: &TestQuestionBank, subject: Subject, bucket: GradeBucket) -> &[TestQuestion] {
    bank.get(&subject)
        .and_then(|buckets| buckets.get(&bucket))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn get_test_questions(subject: Subject, bucket: GradeBucket) -> &'static [TestQuestion] {
    questions_in(&COURSE_TEST_QUESTIONS, subject, bucket)
}

/// Up to `count` distinct questions for the subject at `grade`, in random order.
pub fn sample_test_questions_with<R: Rng + ?Sized>(
    rng: &mut R,
    bank: &TestQuestionBank,
    subject: Subject,
    grade: u32,
    count: usize,
) -> Vec<TestQuestion> {
    let bucket = GradeBucket::for_grade(grade);
    let pool = questions_in(bank, subject, bucket);
    if pool.is_empty() {
        tracing::debug!(subject = %subject, bucket = ?bucket, "No placement questions for bucket");
        return Vec::new();
    }

    let mut picked: Vec<TestQuestion> = pool.choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    picked
}

pub fn sample_test_questions(subject: Subject, grade: u32, count: usize) -> Vec<TestQuestion> {
    let mut rng = rand::thread_rng();
    sample_test_questions_with(&mut rng, &COURSE_TEST_QUESTIONS, subject, grade, count)
}
