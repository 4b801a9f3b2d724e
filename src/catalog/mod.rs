pub mod lookup;
pub mod plan;
pub mod store;

use plan::{CoursePlan, Language, LessonPlan, Subject};
use store::course_plans;

/// First plan for `grade` in catalog order, whatever its subject.
pub fn get_course_plan(grade: u32) -> Option<&'static CoursePlan> {
    lookup::find_plan(course_plans(), grade)
}

pub fn get_course_plan_by_grade_and_language(
    grade: u32,
    language: Option<Language>,
) -> Option<&'static CoursePlan> {
    lookup::find_plan_by_grade_and_language(course_plans(), grade, language)
}

pub fn get_course_plan_by_subject(subject: Subject, grade: u32) -> Option<&'static CoursePlan> {
    lookup::find_plan_by_subject(course_plans(), subject, grade)
}

pub fn get_lesson_from_plan(grade: u32, lesson_number: u32) -> Option<&'static LessonPlan> {
    lookup::find_lesson(course_plans(), grade, lesson_number)
}

pub fn get_available_grades() -> Vec<u32> {
    lookup::available_grades(course_plans())
}

pub fn get_subjects() -> Vec<Subject> {
    lookup::subjects(course_plans())
}
