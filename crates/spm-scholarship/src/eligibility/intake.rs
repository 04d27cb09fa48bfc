use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::StudentAttributes;
use super::grades::{Grade, GradeEntry, UnknownGrade};
use super::region::{Region, UnknownRegion};
use super::subjects::is_recognized_subject;

const MAX_COCURRICULAR_SCORE: f32 = 10.0;

/// Validation errors raised while accepting a student submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    UnknownState(#[from] UnknownRegion),
    #[error(transparent)]
    UnknownGrade(#[from] UnknownGrade),
    #[error("unrecognized subject '{0}'")]
    UnknownSubject(String),
    #[error("co-curricular score must be between 0 and 10 (found {0})")]
    CocurricularOutOfRange(f32),
    #[error("subject '{0}' entered more than once")]
    DuplicateSubject(String),
}

/// One row of the grade form as submitted. Missing or blank values mean "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedGrade {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

impl SubmittedGrade {
    pub fn new(subject: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            grade: Some(grade.into()),
        }
    }
}

/// Raw form contents posted by the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSubmission {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub muslim: bool,
    #[serde(default)]
    pub bumiputera: bool,
    pub cocurricular_score: f32,
    #[serde(default)]
    pub grades: Vec<SubmittedGrade>,
    /// Also report rejected scholarships and why.
    #[serde(default)]
    pub explain: bool,
}

/// Validated input ready for profile building and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityRequest {
    pub entries: Vec<GradeEntry>,
    pub attributes: StudentAttributes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakePolicy {
    /// Reject a form that names the same subject twice instead of keeping the later grade.
    pub reject_duplicate_subjects: bool,
}

/// Guard turning raw submissions into typed evaluation input.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

fn selected(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IntakePolicy {
        self.policy
    }

    pub fn accept(
        &self,
        submission: &StudentSubmission,
    ) -> Result<EligibilityRequest, IntakeError> {
        let state = selected(&submission.state)
            .map(|raw| raw.parse::<Region>())
            .transpose()?;

        let score = submission.cocurricular_score;
        if !score.is_finite() || !(0.0..=MAX_COCURRICULAR_SCORE).contains(&score) {
            return Err(IntakeError::CocurricularOutOfRange(score));
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(submission.grades.len());
        for row in &submission.grades {
            let subject = selected(&row.subject);
            if let Some(subject) = subject {
                if !is_recognized_subject(subject) {
                    return Err(IntakeError::UnknownSubject(subject.to_string()));
                }
            }
            let grade = selected(&row.grade)
                .map(|raw| raw.parse::<Grade>())
                .transpose()?;

            if let (Some(subject), Some(_)) = (subject, grade) {
                if !seen.insert(subject) {
                    if self.policy.reject_duplicate_subjects {
                        return Err(IntakeError::DuplicateSubject(subject.to_string()));
                    }
                    debug!(subject, "subject entered more than once; keeping the later grade");
                }
            }

            entries.push(GradeEntry {
                subject: subject.map(str::to_string),
                grade,
            });
        }

        Ok(EligibilityRequest {
            entries,
            attributes: StudentAttributes {
                state,
                is_muslim: submission.muslim,
                is_bumiputera: submission.bumiputera,
                cocurricular_score: score,
            },
        })
    }
}
