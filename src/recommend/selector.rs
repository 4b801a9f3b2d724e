use crate::config::catalog::CatalogConfig;
use crate::inference::grade::GradeTrack;
use crate::recommend::level::MasterySummary;

/// Starting lesson for a learner.
///
/// Exam-prep tracks always start at the diagnostic lesson 1. Otherwise a
/// strong learner jumps to the middle of the course, a mostly-weak learner
/// starts at the beginning, and everyone else lands proportionally to the
/// mastered share. The result is clamped to `1..=total_lessons`.
pub fn get_recommended_lesson_number(
    track: GradeTrack,
    mastery: &MasterySummary,
    total_lessons: u32,
    config: &CatalogConfig,
) -> u32 {
    if track.is_exam_prep() {
        return 1;
    }

    let total = total_lessons.max(1);
    let mastered_fraction = mastery.mastered_fraction();

    let lesson = if mastered_fraction > config.advanced_fraction {
        config.mid_course_lesson
    } else if mastery.weak_fraction() > config.weak_fraction {
        1
    } else {
        (mastered_fraction * total as f64 * config.interpolation_factor).round() as u32
    };

    lesson.clamp(1, total)
}
