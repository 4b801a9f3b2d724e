pub mod level;
pub mod modules;
pub mod selector;

use serde::{Deserialize, Serialize};

use crate::catalog::lookup::find_plan_by_grade_and_language;
use crate::catalog::plan::{CoursePlan, Language, LessonModule, LessonPlan, Level};
use crate::catalog::store::course_plans;
use crate::config::catalog::{get_catalog_config, CatalogConfig};
use crate::inference::grade::{resolve_grade_track, GradeTrack};
use crate::inference::language::detect_language_from_topic;
use level::{level_for_fraction, AssessmentResult, MasterySummary};
use modules::{generate_lesson_modules, populate_course_plan_modules_with_config};
use selector::get_recommended_lesson_number;

/// Weak topics named in the reasoning text.
const REASONING_WEAK_TOPICS: usize = 3;

/// A course, a starting lesson and its modules, picked for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendation {
    pub course_plan: CoursePlan,
    pub grade_track: GradeTrack,
    pub detected_language: Option<Language>,
    pub student_level: Level,
    pub recommended_lesson_number: u32,
    pub recommended_lesson: LessonPlan,
    pub modules: Vec<LessonModule>,
    pub difficulty: Level,
    pub reasoning: String,
}

/// Recommendation against an explicit catalog and configuration.
/// Returns `None` when no plan exists for the resolved grade or the chosen
/// lesson is missing from it.
pub fn recommend(
    plans: &[CoursePlan],
    result: &AssessmentResult,
    config: &CatalogConfig,
) -> Option<CourseRecommendation> {
    let detected_language = result
        .last_topic
        .as_deref()
        .and_then(detect_language_from_topic);
    let track = resolve_grade_track(&result.class_grade, detected_language);

    tracing::debug!(
        class_grade = %result.class_grade,
        grade = track.grade(),
        language = ?detected_language,
        "Resolved grade track"
    );

    let plan = find_plan_by_grade_and_language(plans, track.grade(), detected_language)?;
    let course_plan = populate_course_plan_modules_with_config(plan, config);

    let mastery = result.mastery(config);
    let student_level = level_for_fraction(mastery.mastered_fraction(), config);
    let recommended_lesson_number =
        get_recommended_lesson_number(track, &mastery, course_plan.total_lessons(), config);
    let recommended_lesson = course_plan.lesson(recommended_lesson_number)?.clone();

    let difficulty = recommended_lesson.difficulty.unwrap_or(Level::Intermediate);
    let modules = generate_lesson_modules(&recommended_lesson, student_level);

    tracing::debug!(
        plan = %course_plan.title,
        level = %student_level,
        lesson = recommended_lesson_number,
        modules = modules.len(),
        "Course recommendation ready"
    );

    let reasoning = compose_reasoning(
        &course_plan,
        track,
        &mastery,
        student_level,
        &recommended_lesson,
        difficulty,
    );

    Some(CourseRecommendation {
        course_plan,
        grade_track: track,
        detected_language,
        student_level,
        recommended_lesson_number,
        recommended_lesson,
        modules,
        difficulty,
        reasoning,
    })
}

/// Pick a course and a starting lesson for a placement-test result.
pub fn get_course_recommendation(result: &AssessmentResult) -> Option<CourseRecommendation> {
    recommend(course_plans(), result, get_catalog_config())
}

fn compose_reasoning(
    plan: &CoursePlan,
    track: GradeTrack,
    mastery: &MasterySummary,
    level: Level,
    lesson: &LessonPlan,
    difficulty: Level,
) -> String {
    let mut text = format!(
        "Курс «{}» подобран для {}. Уровень ученика: {} (освоено тем: {} из {}). \
         Рекомендуем начать с урока {} «{}», сложность урока: {}.",
        plan.title,
        track.describe(),
        level.label(),
        mastery.mastered,
        mastery.total,
        lesson.number,
        lesson.title,
        difficulty.label(),
    );

    if track.is_exam_prep() {
        text.push_str(" Подготовка к экзамену начинается с диагностической работы.");
    }

    if !mastery.weak_topics.is_empty() {
        let weak: Vec<&str> = mastery
            .weak_topics
            .iter()
            .take(REASONING_WEAK_TOPICS)
            .map(String::as_str)
            .collect();
        text.push_str(&format!(" Стоит повторить: {}.", weak.join(", ")));
    }

    text
}
