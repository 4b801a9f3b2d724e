use course_catalog::placement::bank::{questions_in, sample_test_questions_with};
use course_catalog::{
    get_test_questions, load_test_questions, sample_test_questions, GradeBucket, Subject,
    COURSE_TEST_QUESTIONS, EGE_GRADE, HIGHER_EDUCATION_GRADE, OGE_GRADE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_bank_covers_every_subject() {
    for subject in Subject::ALL {
        let buckets = COURSE_TEST_QUESTIONS.get(&subject).expect("subject in bank");
        assert!(buckets.values().any(|qs| !qs.is_empty()), "no questions for {}", subject);
    }
}

#[test]
fn test_every_answer_index_is_valid() {
    for buckets in COURSE_TEST_QUESTIONS.values() {
        for questions in buckets.values() {
            for q in questions {
                assert!(q.correct_option().is_some(), "{}", q.question);
                assert!(q.is_correct(q.correct_answer));
            }
        }
    }
}

#[test]
fn test_grade_buckets() {
    assert_eq!(GradeBucket::for_grade(1), GradeBucket::Primary);
    assert_eq!(GradeBucket::for_grade(4), GradeBucket::Primary);
    assert_eq!(GradeBucket::for_grade(5), GradeBucket::Middle);
    assert_eq!(GradeBucket::for_grade(8), GradeBucket::Middle);
    assert_eq!(GradeBucket::for_grade(9), GradeBucket::Oge);
    assert_eq!(GradeBucket::for_grade(OGE_GRADE), GradeBucket::Oge);
    assert_eq!(GradeBucket::for_grade(11), GradeBucket::Senior);
    assert_eq!(GradeBucket::for_grade(EGE_GRADE), GradeBucket::Senior);
    assert_eq!(GradeBucket::for_grade(HIGHER_EDUCATION_GRADE), GradeBucket::Higher);
    assert_eq!(GradeBucket::for_grade(0), GradeBucket::Primary);
}

#[test]
fn test_get_questions_for_bucket() {
    let questions = get_test_questions(Subject::Math, GradeBucket::Middle);
    assert!(!questions.is_empty());
    // Physics starts in grade 7, no primary questions
    assert!(get_test_questions(Subject::Physics, GradeBucket::Primary).is_empty());
}

#[test]
fn test_sample_is_distinct_and_from_bucket() {
    let mut rng = StdRng::seed_from_u64(7);
    let pool = questions_in(&COURSE_TEST_QUESTIONS, Subject::English, GradeBucket::Middle);
    assert!(pool.len() >= 3);

    let sample = sample_test_questions_with(&mut rng, &COURSE_TEST_QUESTIONS, Subject::English, 6, 3);
    assert_eq!(sample.len(), 3);
    for q in &sample {
        assert!(pool.contains(q));
    }
    for (i, a) in sample.iter().enumerate() {
        for b in &sample[i + 1..] {
            assert_ne!(a.question, b.question);
        }
    }
}

#[test]
fn test_sample_caps_at_pool_size() {
    let pool_len = get_test_questions(Subject::History, GradeBucket::Senior).len();
    let sample = sample_test_questions(Subject::History, 10, pool_len + 5);
    assert_eq!(sample.len(), pool_len);
}

#[test]
fn test_sample_from_empty_bucket() {
    assert!(sample_test_questions(Subject::Geography, 2, 3).is_empty());
}

#[test]
fn test_load_rejects_out_of_range_answer() {
    let json = r#"{"math": {"primary": [
        {"question": "2 + 2?", "options": ["3", "4", "5"], "correctAnswer": 3}
    ]}}"#;
    let err = load_test_questions(json).unwrap_err();
    assert_eq!(err.stage, "validation");
    assert!(err.context.as_deref().unwrap_or("").contains("2 + 2?"));
}

#[test]
fn test_load_requires_three_options() {
    let json = r#"{"math": {"primary": [
        {"question": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1}
    ]}}"#;
    assert_eq!(load_test_questions(json).unwrap_err().stage, "json_parse");
}

#[test]
fn test_load_wire_format() {
    let json = r#"{"social": {"oge": [
        {"question": "Основной закон РФ?", "options": ["Конституция", "Указ", "Кодекс"], "correctAnswer": 0}
    ]}}"#;
    let bank = load_test_questions(json).expect("valid bank");
    let questions = questions_in(&bank, Subject::SocialStudies, GradeBucket::Oge);
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_option(), Some("Конституция"));
    assert!(!questions[0].is_correct(2));
}
