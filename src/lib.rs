//! Static catalog of tutoring course plans and placement-test questions,
//! with the lookups and the recommendation logic that pick a course and a
//! starting lesson from a learner's grade and assessment profile.

pub mod catalog;
pub mod config;
pub mod error;
pub mod inference;
pub mod logging;
pub mod placement;
pub mod recommend;

pub use catalog::plan::{
    CoursePlan, Language, LessonModule, LessonPlan, Level, ModuleType, Subject, EGE_GRADE,
    HIGHER_EDUCATION_GRADE, OGE_GRADE,
};
pub use catalog::store::{load_course_plans, validate_catalog, COURSE_PLANS};
pub use catalog::{
    get_available_grades, get_course_plan, get_course_plan_by_grade_and_language,
    get_course_plan_by_subject, get_lesson_from_plan, get_subjects,
};
pub use config::catalog::{get_catalog_config, CatalogConfig};
pub use error::CatalogError;
pub use inference::grade::{extract_grade_number, resolve_grade_track, GradeTrack};
pub use inference::language::detect_language_from_topic;
pub use placement::bank::{
    get_test_questions, load_test_questions, sample_test_questions, COURSE_TEST_QUESTIONS,
};
pub use placement::question::{GradeBucket, TestQuestion, TestQuestionBank};
pub use recommend::level::{determine_student_level, AssessmentResult, TopicMastery};
pub use recommend::modules::{
    determine_lesson_difficulty, generate_lesson_modules, populate_course_plan_modules,
};
pub use recommend::{get_course_recommendation, CourseRecommendation};
