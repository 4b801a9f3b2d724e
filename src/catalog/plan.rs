use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel grade for the OGE (end of 9th grade) exam-prep track.
pub const OGE_GRADE: u32 = 90;
/// Sentinel grade for the EGE (end of 11th grade) exam-prep track.
pub const EGE_GRADE: u32 = 100;
/// Sentinel grade for the higher-education track.
pub const HIGHER_EDUCATION_GRADE: u32 = 200;

/// Subjects taught by the catalog. The serialized form is the subject id
/// used as the outer key of the test-question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    English,
    Russian,
    Chinese,
    Arabic,
    Math,
    Physics,
    Geography,
    History,
    #[serde(rename = "social")]
    SocialStudies,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::English,
        Subject::Russian,
        Subject::Chinese,
        Subject::Arabic,
        Subject::Math,
        Subject::Physics,
        Subject::Geography,
        Subject::History,
        Subject::SocialStudies,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Subject::English => "english",
            Subject::Russian => "russian",
            Subject::Chinese => "chinese",
            Subject::Arabic => "arabic",
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::Geography => "geography",
            Subject::History => "history",
            Subject::SocialStudies => "social",
        }
    }

    pub fn from_id(id: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Subject named by a plan title such as "Физика — 7 класс".
    pub fn from_title(title: &str) -> Option<Subject> {
        if let Some(language) = LANGUAGES.into_iter().find(|l| l.matches_title(title)) {
            return Some(language.subject());
        }
        let title = title.to_lowercase();
        SUBJECT_TITLE_STEMS
            .iter()
            .find(|(stem, _)| title.contains(stem))
            .map(|(_, subject)| *subject)
    }

    /// The language this subject teaches, if it is a language course.
    pub fn language(self) -> Option<Language> {
        match self {
            Subject::English => Some(Language::English),
            Subject::Russian => Some(Language::Russian),
            Subject::Chinese => Some(Language::Chinese),
            Subject::Arabic => Some(Language::Arabic),
            _ => None,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// Non-language subjects; language courses match through `Language::matches_title`.
const SUBJECT_TITLE_STEMS: &[(&str, Subject)] = &[
    ("математ", Subject::Math),
    ("алгебр", Subject::Math),
    ("геометр", Subject::Math),
    ("физик", Subject::Physics),
    ("географ", Subject::Geography),
    ("истори", Subject::History),
    ("обществозн", Subject::SocialStudies),
    ("math", Subject::Math),
    ("physics", Subject::Physics),
    ("geography", Subject::Geography),
    ("history", Subject::History),
    ("social studies", Subject::SocialStudies),
];

const LANGUAGES: [Language; 4] = [
    Language::English,
    Language::Russian,
    Language::Chinese,
    Language::Arabic,
];

/// Languages the catalog can detect from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Russian,
    Chinese,
    Arabic,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Russian => "russian",
            Language::Chinese => "chinese",
            Language::Arabic => "arabic",
        }
    }

    pub fn subject(self) -> Subject {
        match self {
            Language::English => Subject::English,
            Language::Russian => Subject::Russian,
            Language::Chinese => Subject::Chinese,
            Language::Arabic => Subject::Arabic,
        }
    }

    /// Lowercase stem that appears in the titles of this language's plans.
    pub fn title_stem(self) -> &'static str {
        match self {
            Language::English => "английск",
            Language::Russian => "русск",
            Language::Chinese => "китайск",
            Language::Arabic => "арабск",
        }
    }

    /// Whether a plan title names this language.
    pub fn matches_title(self, title: &str) -> bool {
        let title = title.to_lowercase();
        title.contains(self.title_stem()) || title.contains(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Learner level and lesson difficulty tier, ordered
/// beginner < intermediate < advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Label shown to learners.
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "начальный",
            Level::Intermediate => "средний",
            Level::Advanced => "продвинутый",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Theory,
    Practice,
    Test,
    Conspectus,
}

/// A sub-unit of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonModule {
    pub number: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub content: String,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
}

/// One numbered lesson inside a course plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub number: u32,
    pub title: String,
    pub topic: String,
    /// Free-form description of vocabulary, grammar points or concepts.
    pub aspects: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<LessonModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Level>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}

impl LessonPlan {
    /// `aspects` split on `;` and `,` for display.
    pub fn aspect_items(&self) -> Vec<&str> {
        self.aspects
            .split(|c| c == ';' || c == ',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    }
}

/// The full curriculum for one subject at one grade.
///
/// Deserializes from records without `subject` (it is read off the title)
/// and with `grade` written as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoursePlanRecord")]
pub struct CoursePlan {
    pub subject: Subject,
    pub grade: u32,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonPlan>,
}

impl CoursePlan {
    pub fn lesson(&self, number: u32) -> Option<&LessonPlan> {
        self.lessons.iter().find(|l| l.number == number)
    }

    pub fn total_lessons(&self) -> u32 {
        self.lessons.len() as u32
    }

    /// Composite `(subject, grade)` key.
    pub fn key(&self) -> (Subject, u32) {
        (self.subject, self.grade)
    }
}

#[derive(Deserialize)]
struct CoursePlanRecord {
    #[serde(default)]
    subject: Option<Subject>,
    #[serde(deserialize_with = "grade_number_or_string")]
    grade: u32,
    title: String,
    #[serde(default)]
    description: String,
    lessons: Vec<LessonPlan>,
}

impl TryFrom<CoursePlanRecord> for CoursePlan {
    type Error = String;

    fn try_from(record: CoursePlanRecord) -> Result<Self, Self::Error> {
        let subject = match record.subject {
            Some(subject) => subject,
            None => Subject::from_title(&record.title)
                .ok_or_else(|| format!("no subject given and none named in title '{}'", record.title))?,
        };
        Ok(CoursePlan {
            subject,
            grade: record.grade,
            title: record.title,
            description: record.description,
            lessons: record.lessons,
        })
    }
}

fn grade_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Grade {
        Number(u32),
        Text(String),
    }

    match Grade::deserialize(deserializer)? {
        Grade::Number(n) => Ok(n),
        Grade::Text(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| de::Error::custom(format!("grade '{}' is not a number", text))),
    }
}
