//! SPM scholarship eligibility: grade profiles, the scholarship table, and the gate evaluator.

pub mod advisory;
pub mod catalog;
pub mod domain;
mod gates;
pub mod grades;
pub mod intake;
pub mod region;
pub mod router;
pub mod service;
pub mod subjects;

#[cfg(test)]
mod tests;

pub use advisory::advisory_brief;
pub use catalog::{export_csv, scholarship_catalog, validate_catalog, CatalogError};
pub use domain::{FieldOfStudy, IncomeTier, ScholarshipRule, StudentAttributes};
pub use gates::{assess_rule, Disqualifier, Verdict, SCIENCE_CORE_SUBJECTS};
pub use grades::{build_profile, Grade, GradeEntry, GradeProfile, UnknownGrade};
pub use intake::{
    EligibilityRequest, IntakeError, IntakeGuard, IntakePolicy, StudentSubmission, SubmittedGrade,
};
pub use region::{Region, StateRequirement, UnknownRegion};
pub use router::eligibility_router;
pub use service::{EligibilityReport, EligibilityService, GradeCounts, RejectedScholarship};
pub use subjects::{is_recognized_subject, SUBJECT_CATALOG};

use serde::Serialize;

/// Stateless evaluator over a borrowed scholarship table.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEngine<'c> {
    catalog: &'c [ScholarshipRule],
}

impl<'c> EligibilityEngine<'c> {
    pub fn new(catalog: &'c [ScholarshipRule]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c [ScholarshipRule] {
        self.catalog
    }

    /// Verdict for every scholarship, in catalog order.
    pub fn assess(
        &self,
        profile: &GradeProfile,
        attrs: &StudentAttributes,
    ) -> Vec<RuleAssessment<'c>> {
        self.catalog
            .iter()
            .map(|rule| RuleAssessment {
                rule,
                verdict: assess_rule(rule, profile, attrs),
            })
            .collect()
    }

    /// Scholarships the student qualifies for, in catalog order.
    pub fn evaluate(
        &self,
        profile: &GradeProfile,
        attrs: &StudentAttributes,
    ) -> Vec<EligibilityMatch<'c>> {
        self.catalog
            .iter()
            .filter(|rule| assess_rule(rule, profile, attrs).is_eligible())
            .map(|rule| EligibilityMatch {
                rule,
                eligible: true,
            })
            .collect()
    }
}

impl EligibilityEngine<'static> {
    pub fn standard() -> Self {
        Self::new(scholarship_catalog())
    }
}

pub fn evaluate<'c>(
    profile: &GradeProfile,
    attrs: &StudentAttributes,
    catalog: &'c [ScholarshipRule],
) -> Vec<EligibilityMatch<'c>> {
    EligibilityEngine::new(catalog).evaluate(profile, attrs)
}

/// A scholarship the student qualifies for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityMatch<'c> {
    pub rule: &'c ScholarshipRule,
    pub eligible: bool,
}

/// A scholarship paired with the verdict reached for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleAssessment<'c> {
    pub rule: &'c ScholarshipRule,
    pub verdict: Verdict,
}
