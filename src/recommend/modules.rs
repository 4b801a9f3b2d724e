use crate::catalog::plan::{CoursePlan, LessonModule, LessonPlan, Level, ModuleType};
use crate::config::catalog::{get_catalog_config, CatalogConfig};
use crate::inference::grade::GradeTrack;

/// Minutes for each synthesized module.
const CONSPECTUS_MINUTES: u32 = 10;
const THEORY_MINUTES: u32 = 20;
const PRACTICE_MINUTES: u32 = 25;
const TEST_MINUTES: u32 = 15;
const PREP_MINUTES: u32 = 15;
const ADVANCED_PRACTICE_MINUTES: u32 = 20;
const ADVANCED_TEST_MINUTES: u32 = 15;

/// Difficulty tier of a lesson from its track and its position in the
/// school year.
///
/// Exam-prep tracks open with three intermediate review lessons and are
/// advanced afterwards; the higher-education track is advanced throughout.
/// School grades split the year into brackets: grades 1–4 are beginner for
/// the first two thirds, grades 5–8 move beginner → intermediate →
/// advanced at one third and three quarters, grades 9–11 are intermediate
/// for the first half.
pub fn determine_lesson_difficulty(grade: u32, lesson_number: u32, school_year_lessons: u32) -> Level {
    match GradeTrack::from_grade(grade) {
        GradeTrack::Oge | GradeTrack::Ege => {
            if lesson_number <= 3 {
                Level::Intermediate
            } else {
                Level::Advanced
            }
        }
        GradeTrack::HigherEducation => Level::Advanced,
        GradeTrack::School(school_grade) => {
            let position = lesson_number as f64 / school_year_lessons.max(1) as f64;
            match school_grade {
                0..=4 => {
                    if position < 2.0 / 3.0 {
                        Level::Beginner
                    } else {
                        Level::Intermediate
                    }
                }
                5..=8 => {
                    if position < 1.0 / 3.0 {
                        Level::Beginner
                    } else if position < 0.75 {
                        Level::Intermediate
                    } else {
                        Level::Advanced
                    }
                }
                _ => {
                    if position < 0.5 {
                        Level::Intermediate
                    } else {
                        Level::Advanced
                    }
                }
            }
        }
    }
}

fn module(title: String, module_type: ModuleType, content: String, minutes: u32) -> LessonModule {
    LessonModule {
        number: 0,
        title,
        module_type,
        content,
        estimated_time: Some(minutes),
    }
}

fn renumber(modules: &mut [LessonModule]) {
    for (i, m) in modules.iter_mut().enumerate() {
        m.number = i as u32 + 1;
    }
}

/// Conspectus, theory, practice and test for a lesson without authored modules.
pub fn default_modules(lesson: &LessonPlan) -> Vec<LessonModule> {
    let mut modules = vec![
        module(
            "Конспект урока".to_string(),
            ModuleType::Conspectus,
            format!("Краткий конспект урока «{}»: {}", lesson.title, lesson.aspects),
            CONSPECTUS_MINUTES,
        ),
        module(
            "Теория".to_string(),
            ModuleType::Theory,
            format!("Теория по теме «{}»: {}", lesson.topic, lesson.aspect_items().join("; ")),
            THEORY_MINUTES,
        ),
        module(
            "Практика".to_string(),
            ModuleType::Practice,
            format!("Упражнения на закрепление темы «{}».", lesson.topic),
            PRACTICE_MINUTES,
        ),
        module(
            "Тест".to_string(),
            ModuleType::Test,
            format!("Проверочный тест по теме «{}».", lesson.topic),
            TEST_MINUTES,
        ),
    ];
    renumber(&mut modules);
    modules
}

fn populate_lesson(lesson: &LessonPlan, grade: u32, school_year_lessons: u32) -> LessonPlan {
    let mut populated = lesson.clone();
    if populated.modules.is_empty() {
        populated.modules = default_modules(lesson);
    }
    if populated.difficulty.is_none() {
        populated.difficulty = Some(determine_lesson_difficulty(grade, lesson.number, school_year_lessons));
    }
    populated
}

pub fn populate_course_plan_modules_with_config(plan: &CoursePlan, config: &CatalogConfig) -> CoursePlan {
    CoursePlan {
        lessons: plan
            .lessons
            .iter()
            .map(|l| populate_lesson(l, plan.grade, config.school_year_lessons))
            .collect(),
        ..plan.clone()
    }
}

/// Copy of `plan` where every lesson has modules and a difficulty.
/// Authored modules and difficulties are kept; the input is untouched.
pub fn populate_course_plan_modules(plan: &CoursePlan) -> CoursePlan {
    populate_course_plan_modules_with_config(plan, get_catalog_config())
}

/// Modules for one lesson tailored to a learner level.
///
/// A learner below the lesson's tier gets a prep module first; otherwise
/// intermediate and advanced learners get extra practice and advanced
/// learners an extra test. Numbers always run 1..=n. A lesson without a
/// difficulty is treated as intermediate.
pub fn generate_lesson_modules(lesson: &LessonPlan, level: Level) -> Vec<LessonModule> {
    let mut modules = if lesson.modules.is_empty() {
        default_modules(lesson)
    } else {
        lesson.modules.clone()
    };

    let difficulty = lesson.difficulty.unwrap_or(Level::Intermediate);

    if level < difficulty {
        modules.insert(
            0,
            module(
                "Подготовка: повторение основ".to_string(),
                ModuleType::Theory,
                format!("Повторение базовых понятий, необходимых для темы «{}».", lesson.topic),
                PREP_MINUTES,
            ),
        );
    } else {
        if level >= Level::Intermediate {
            modules.push(module(
                "Углублённая практика".to_string(),
                ModuleType::Practice,
                format!("Задания повышенной сложности по теме «{}».", lesson.topic),
                ADVANCED_PRACTICE_MINUTES,
            ));
        }
        if level == Level::Advanced {
            modules.push(module(
                "Расширенный тест".to_string(),
                ModuleType::Test,
                format!("Тест повышенного уровня по теме «{}».", lesson.topic),
                ADVANCED_TEST_MINUTES,
            ));
        }
    }

    renumber(&mut modules);
    modules
}
