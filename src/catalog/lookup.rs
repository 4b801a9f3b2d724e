use crate::catalog::plan::{CoursePlan, Language, LessonPlan, Subject};

/// First plan with the given grade, whatever its subject.
pub fn find_plan(plans: &[CoursePlan], grade: u32) -> Option<&CoursePlan> {
    plans.iter().find(|p| p.grade == grade)
}

/// Plan for `grade` whose title names `language`. Without a language this
/// is [`find_plan`]. If no title matches, falls back to the first plan for
/// the grade and logs a warning.
pub fn find_plan_by_grade_and_language(
    plans: &[CoursePlan],
    grade: u32,
    language: Option<Language>,
) -> Option<&CoursePlan> {
    let Some(language) = language else {
        return find_plan(plans, grade);
    };

    if let Some(plan) = plans
        .iter()
        .find(|p| p.grade == grade && language.matches_title(&p.title))
    {
        return Some(plan);
    }

    let fallback = find_plan(plans, grade);
    if let Some(plan) = fallback {
        tracing::warn!(
            grade = grade,
            language = %language,
            fallback = %plan.title,
            "No course plan for language, falling back to first plan for grade"
        );
    }
    fallback
}

/// Exact `(subject, grade)` lookup.
pub fn find_plan_by_subject(plans: &[CoursePlan], subject: Subject, grade: u32) -> Option<&CoursePlan> {
    plans.iter().find(|p| p.subject == subject && p.grade == grade)
}

pub fn find_lesson(plans: &[CoursePlan], grade: u32, lesson_number: u32) -> Option<&LessonPlan> {
    find_plan(plans, grade)?.lesson(lesson_number)
}

/// Distinct grades, ascending.
pub fn available_grades(plans: &[CoursePlan]) -> Vec<u32> {
    let mut grades: Vec<u32> = plans.iter().map(|p| p.grade).collect();
    grades.sort_unstable();
    grades.dedup();
    grades
}

/// Distinct subjects in catalog order.
pub fn subjects(plans: &[CoursePlan]) -> Vec<Subject> {
    let mut seen = Vec::new();
    for plan in plans {
        if !seen.contains(&plan.subject) {
            seen.push(plan.subject);
        }
    }
    seen
}
