use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::plan::{Language, EGE_GRADE, HIGHER_EDUCATION_GRADE, OGE_GRADE};

/// Grade returned when nothing in the input is recognised.
pub const DEFAULT_GRADE: u32 = 1;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").expect("digit pattern is valid");
}

/// Ordinal words, longest first within each language so that no entry
/// shadows a longer one.
const ORDINALS: &[(&str, u32)] = &[
    ("одиннадцатый", 11),
    ("одиннадцатом", 11),
    ("десятый", 10),
    ("десятом", 10),
    ("девятый", 9),
    ("девятом", 9),
    ("восьмой", 8),
    ("восьмом", 8),
    ("седьмой", 7),
    ("седьмом", 7),
    ("шестой", 6),
    ("шестом", 6),
    ("пятый", 5),
    ("пятом", 5),
    ("четвёртый", 4),
    ("четвёртом", 4),
    ("четвертый", 4),
    ("четвертом", 4),
    ("третий", 3),
    ("третьем", 3),
    ("второй", 2),
    ("втором", 2),
    ("первый", 1),
    ("первом", 1),
    ("eleventh", 11),
    ("seventh", 7),
    ("fourth", 4),
    ("second", 2),
    ("eighth", 8),
    ("fifth", 5),
    ("sixth", 6),
    ("ninth", 9),
    ("tenth", 10),
    ("first", 1),
    ("third", 3),
];

const HIGHER_EDUCATION_KEYWORDS: &[&str] = &[
    "вуз",
    "университет",
    "институт",
    "студент",
    "бакалавр",
    "магистр",
    "колледж",
    "university",
    "college",
    "university student",
    "bachelor",
    "master's",
    "masters degree",
    "higher education",
];

const OGE_KEYWORDS: &[&str] = &["огэ", "гиа"];
const EGE_KEYWORDS: &[&str] = &["егэ"];

/// Best-effort numeric grade from a free-text label.
///
/// Tries, in order: the first ASCII digit run that fits a `u32`, an ordinal word, a
/// higher-education keyword (which yields the 200 sentinel). Anything else
/// is grade 1. Never fails.
pub fn extract_grade_number(input: &str) -> u32 {
    if let Some(number) = DIGITS
        .find_iter(input)
        .find_map(|m| m.as_str().parse::<u32>().ok())
    {
        return number;
    }

    let lowered = input.to_lowercase();

    if let Some((_, number)) = ORDINALS.iter().find(|(word, _)| lowered.contains(word)) {
        return *number;
    }

    if is_higher_education(&lowered) {
        return HIGHER_EDUCATION_GRADE;
    }

    DEFAULT_GRADE
}

/// Expects lowercased input.
pub fn is_higher_education(lowered: &str) -> bool {
    HIGHER_EDUCATION_KEYWORDS.iter().any(|k| lowered.contains(k))
}

fn exam_track_from_phrase(lowered: &str) -> Option<GradeTrack> {
    if OGE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Some(GradeTrack::Oge);
    }
    if EGE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Some(GradeTrack::Ege);
    }
    None
}

/// Which course sequence a learner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "track", content = "grade", rename_all = "snake_case")]
pub enum GradeTrack {
    /// Literal school grade 1–11.
    School(u32),
    Oge,
    Ege,
    HigherEducation,
}

impl GradeTrack {
    /// Numeric key used by course plans.
    pub fn grade(self) -> u32 {
        match self {
            GradeTrack::School(n) => n,
            GradeTrack::Oge => OGE_GRADE,
            GradeTrack::Ege => EGE_GRADE,
            GradeTrack::HigherEducation => HIGHER_EDUCATION_GRADE,
        }
    }

    pub fn from_grade(grade: u32) -> GradeTrack {
        match grade {
            OGE_GRADE => GradeTrack::Oge,
            EGE_GRADE => GradeTrack::Ege,
            HIGHER_EDUCATION_GRADE => GradeTrack::HigherEducation,
            n => GradeTrack::School(n),
        }
    }

    pub fn is_exam_prep(self) -> bool {
        matches!(self, GradeTrack::Oge | GradeTrack::Ege)
    }

    /// Phrase used in recommendation text.
    pub fn describe(self) -> String {
        match self {
            GradeTrack::School(n) => format!("{} класса", n),
            GradeTrack::Oge => "подготовки к ОГЭ".to_string(),
            GradeTrack::Ege => "подготовки к ЕГЭ".to_string(),
            GradeTrack::HigherEducation => "студентов вузов".to_string(),
        }
    }
}

/// Map a self-reported grade to a course track. First match wins:
/// grade 9 is OGE prep, grade 11 is EGE prep, an explicit exam name picks
/// that exam, a higher-education phrase picks the higher-education track
/// (EGE-level English for English learners), a school grade is kept as is,
/// and anything else is grade 1.
pub fn resolve_grade_track(class_grade: &str, language: Option<Language>) -> GradeTrack {
    let number = extract_grade_number(class_grade);
    let lowered = class_grade.to_lowercase();

    match number {
        9 => return GradeTrack::Oge,
        11 => return GradeTrack::Ege,
        _ => {}
    }

    if let Some(track) = exam_track_from_phrase(&lowered) {
        return track;
    }

    if is_higher_education(&lowered) {
        return if language == Some(Language::English) {
            GradeTrack::Ege
        } else {
            GradeTrack::HigherEducation
        };
    }

    if (1..=11).contains(&number) {
        GradeTrack::School(number)
    } else {
        GradeTrack::School(DEFAULT_GRADE)
    }
}
