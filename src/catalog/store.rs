use std::collections::HashSet;
use lazy_static::lazy_static;

use crate::catalog::plan::CoursePlan;
use crate::error::CatalogError;

const EMBEDDED_COURSE_PLANS: &str = include_str!("../../data/course_plans.json");

/// Parse a course-plan catalog from its JSON wire format.
pub fn load_course_plans(json: &str) -> Result<Vec<CoursePlan>, CatalogError> {
    serde_json::from_str::<Vec<CoursePlan>>(json)
        .map_err(|e| CatalogError::from(e).with_context("course plans"))
}

/// Check the structural invariants lookups rely on: one plan per
/// `(subject, grade)`, no empty plans, unique lesson numbers per plan.
pub fn validate_catalog(plans: &[CoursePlan]) -> Result<(), CatalogError> {
    let mut keys = HashSet::new();
    for plan in plans {
        if !keys.insert(plan.key()) {
            return Err(CatalogError::new(
                format!("Duplicate course plan for {} grade {}", plan.subject, plan.grade),
                "validation"
            ).with_context(plan.title.clone()));
        }

        if plan.lessons.is_empty() {
            return Err(CatalogError::new(
                format!("Course plan '{}' has no lessons", plan.title),
                "validation"
            ));
        }

        let mut numbers = HashSet::new();
        for lesson in &plan.lessons {
            if !numbers.insert(lesson.number) {
                return Err(CatalogError::new(
                    format!("Duplicate lesson number {} in '{}'", lesson.number, plan.title),
                    "validation"
                ));
            }
        }
    }
    Ok(())
}

fn load_embedded_course_plans() -> Vec<CoursePlan> {
    match load_course_plans(EMBEDDED_COURSE_PLANS) {
        Ok(plans) => {
            tracing::debug!(count = plans.len(), "Loaded embedded course plans");
            plans
        }
        Err(e) => {
            tracing::error!(error = %e, "Embedded course plans are unreadable");
            Vec::new()
        }
    }
}

lazy_static! {
    /// Every course plan, in catalog order. Immutable for the life of the process.
    pub static ref COURSE_PLANS: Vec<CoursePlan> = load_embedded_course_plans();
}

pub fn course_plans() -> &'static [CoursePlan] {
    &COURSE_PLANS
}
