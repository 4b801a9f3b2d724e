use serde::{Deserialize, Serialize};

use crate::catalog::plan::Level;
use crate::config::catalog::{get_catalog_config, CatalogConfig};

/// Mastery estimate for one topic of a placement test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicMastery {
    pub topic: String,
    /// Probability in [0, 1] that the topic is mastered.
    pub p: f64,
}

/// Placement-test output produced upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub class_grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_topic: Option<String>,
    #[serde(default)]
    pub profile: Vec<TopicMastery>,
}

/// Counts of mastered and weak topics in a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterySummary {
    pub total: usize,
    pub mastered: usize,
    pub weak_topics: Vec<String>,
}

impl MasterySummary {
    pub fn from_profile(profile: &[TopicMastery], threshold: f64) -> Self {
        let mut mastered = 0;
        let mut weak_topics = Vec::new();
        for entry in profile {
            // NaN fails the comparison and counts as weak
            if entry.p >= threshold {
                mastered += 1;
            } else {
                weak_topics.push(entry.topic.clone());
            }
        }
        MasterySummary {
            total: profile.len(),
            mastered,
            weak_topics,
        }
    }

    /// Zero for an empty profile.
    pub fn mastered_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.mastered as f64 / self.total as f64
    }

    /// Zero for an empty profile.
    pub fn weak_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.weak_topics.len() as f64 / self.total as f64
    }
}

impl AssessmentResult {
    pub fn mastery(&self, config: &CatalogConfig) -> MasterySummary {
        MasterySummary::from_profile(&self.profile, config.mastery_threshold)
    }
}

pub fn level_for_fraction(mastered_fraction: f64, config: &CatalogConfig) -> Level {
    if mastered_fraction > config.advanced_fraction {
        Level::Advanced
    } else if mastered_fraction > config.intermediate_fraction {
        Level::Intermediate
    } else {
        Level::Beginner
    }
}

pub fn determine_student_level_with_config(result: &AssessmentResult, config: &CatalogConfig) -> Level {
    level_for_fraction(result.mastery(config).mastered_fraction(), config)
}

/// Classify a learner purely from the share of mastered topics.
pub fn determine_student_level(result: &AssessmentResult) -> Level {
    determine_student_level_with_config(result, get_catalog_config())
}
