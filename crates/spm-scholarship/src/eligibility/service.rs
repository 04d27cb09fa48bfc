use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::advisory::advisory_brief;
use super::catalog::scholarship_catalog;
use super::domain::ScholarshipRule;
use super::gates::{Disqualifier, Verdict};
use super::grades::GradeProfile;
use super::intake::{IntakeError, IntakeGuard, IntakePolicy, StudentSubmission};
use super::EligibilityEngine;

/// Aggregate grade counters echoed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeCounts {
    pub subjects: usize,
    pub a_plus: u32,
    pub a_strict: u32,
    pub a_loose: u32,
}

impl From<&GradeProfile> for GradeCounts {
    fn from(profile: &GradeProfile) -> Self {
        Self {
            subjects: profile.subject_count(),
            a_plus: profile.count_a_plus(),
            a_strict: profile.count_a_strict(),
            a_loose: profile.count_a_loose(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedScholarship {
    pub name: String,
    pub provider: String,
    pub summary: String,
    pub reason: Disqualifier,
}

/// Result of checking one submission against the scholarship table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityReport {
    pub generated_at: DateTime<Utc>,
    pub counts: GradeCounts,
    pub eligible: Vec<ScholarshipRule>,
    pub advisory_brief: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Vec<RejectedScholarship>>,
}

impl EligibilityReport {
    pub fn eligible_names(&self) -> Vec<&str> {
        self.eligible.iter().map(|rule| rule.name.as_str()).collect()
    }
}

/// Service composing the intake guard, profile builder, and evaluator.
#[derive(Debug, Clone)]
pub struct EligibilityService {
    guard: IntakeGuard,
    engine: EligibilityEngine<'static>,
}

impl Default for EligibilityService {
    fn default() -> Self {
        Self::new(IntakePolicy::default())
    }
}

impl EligibilityService {
    pub fn new(policy: IntakePolicy) -> Self {
        Self::with_catalog(policy, scholarship_catalog())
    }

    pub fn with_catalog(policy: IntakePolicy, catalog: &'static [ScholarshipRule]) -> Self {
        Self {
            guard: IntakeGuard::with_policy(policy),
            engine: EligibilityEngine::new(catalog),
        }
    }

    pub fn catalog(&self) -> &'static [ScholarshipRule] {
        self.engine.catalog()
    }

    pub fn check(
        &self,
        submission: &StudentSubmission,
    ) -> Result<EligibilityReport, IntakeError> {
        let request = self.guard.accept(submission)?;
        let profile = GradeProfile::build(&request.entries);
        let attrs = request.attributes;

        let matches = self.engine.evaluate(&profile, &attrs);
        let brief = advisory_brief(&profile, &attrs, &matches);

        let rejected = submission.explain.then(|| {
            self.engine
                .assess(&profile, &attrs)
                .into_iter()
                .filter_map(|assessment| match assessment.verdict {
                    Verdict::Eligible => None,
                    Verdict::Ineligible(reason) => Some(RejectedScholarship {
                        name: assessment.rule.name.clone(),
                        provider: assessment.rule.provider.clone(),
                        summary: reason.summary(),
                        reason,
                    }),
                })
                .collect::<Vec<_>>()
        });

        debug!(
            subjects = profile.subject_count(),
            a_plus = profile.count_a_plus(),
            eligible = matches.len(),
            "eligibility evaluated"
        );

        Ok(EligibilityReport {
            generated_at: Utc::now(),
            counts: GradeCounts::from(&profile),
            eligible: matches.into_iter().map(|item| item.rule.clone()).collect(),
            advisory_brief: brief,
            rejected,
        })
    }
}
