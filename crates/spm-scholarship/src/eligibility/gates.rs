use serde::Serialize;

use super::domain::{ScholarshipRule, StudentAttributes};
use super::grades::{Grade, GradeProfile};
use super::region::{Region, StateRequirement};

/// Subjects the science core gate inspects; each must be A+ or A.
pub const SCIENCE_CORE_SUBJECTS: [&str; 3] = ["Matematik", "Matematik Tambahan", "Fizik"];

/// Outcome of checking one scholarship against a student.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    Eligible,
    Ineligible(Disqualifier),
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Verdict::Eligible)
    }

    pub fn summary(&self) -> String {
        match self {
            Verdict::Eligible => "eligible".to_string(),
            Verdict::Ineligible(reason) => reason.summary(),
        }
    }
}

/// First condition a student failed, in gate order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum Disqualifier {
    RegionMismatch {
        required: Region,
        actual: Option<Region>,
    },
    MuslimOnly,
    BumiputeraOnly,
    InsufficientAGrades {
        required: u32,
        actual: u32,
        a_minus_counted: bool,
    },
    SubjectRequirement {
        subject: String,
        accepted: Vec<Grade>,
        actual: Option<Grade>,
    },
    ScienceCore {
        subject: String,
        actual: Option<Grade>,
    },
    InsufficientAPlus {
        required: u32,
        actual: u32,
    },
    GradeBelowFloor {
        subject: String,
        grade: Grade,
    },
    CocurricularBelowMinimum {
        required: f32,
        actual: f32,
    },
}

fn describe_grade(grade: Option<Grade>) -> String {
    match grade {
        Some(grade) => grade.to_string(),
        None => "not taken".to_string(),
    }
}

impl Disqualifier {
    pub fn summary(&self) -> String {
        match self {
            Disqualifier::RegionMismatch { required, actual } => match actual {
                Some(actual) => format!("open to {required} residents only (student from {actual})"),
                None => format!("open to {required} residents only"),
            },
            Disqualifier::MuslimOnly => "open to Muslim students only".to_string(),
            Disqualifier::BumiputeraOnly => "open to Bumiputera students only".to_string(),
            Disqualifier::InsufficientAGrades {
                required,
                actual,
                a_minus_counted,
            } => {
                let counted = if *a_minus_counted { "A+/A/A-" } else { "A+/A" };
                format!("needs {required} {counted} grades, has {actual}")
            }
            Disqualifier::SubjectRequirement {
                subject,
                accepted,
                actual,
            } => {
                let labels: Vec<&str> = accepted.iter().map(|grade| grade.label()).collect();
                format!(
                    "{subject} must be {} ({})",
                    labels.join("/"),
                    describe_grade(*actual)
                )
            }
            Disqualifier::ScienceCore { subject, actual } => format!(
                "science core requires A+/A in {subject} ({})",
                describe_grade(*actual)
            ),
            Disqualifier::InsufficientAPlus { required, actual } => {
                format!("needs {required} A+ grades, has {actual}")
            }
            Disqualifier::GradeBelowFloor { subject, grade } => {
                format!("every subject must be A- or better ({subject} is {grade})")
            }
            Disqualifier::CocurricularBelowMinimum { required, actual } => format!(
                "co-curricular score {actual:.2} below minimum {required:.2}"
            ),
        }
    }
}

/// Run the gates for one scholarship in order, stopping at the first failure.
pub fn assess_rule(
    rule: &ScholarshipRule,
    profile: &GradeProfile,
    attrs: &StudentAttributes,
) -> Verdict {
    match first_disqualifier(rule, profile, attrs) {
        Some(reason) => Verdict::Ineligible(reason),
        None => Verdict::Eligible,
    }
}

fn first_disqualifier(
    rule: &ScholarshipRule,
    profile: &GradeProfile,
    attrs: &StudentAttributes,
) -> Option<Disqualifier> {
    region_gate(rule, attrs)
        .or_else(|| religion_gate(rule, attrs))
        .or_else(|| ethnicity_gate(rule, attrs))
        .or_else(|| grade_threshold_gate(rule, profile))
        .or_else(|| hard_requirement_gate(rule, profile))
        .or_else(|| science_core_gate(rule, profile))
        .or_else(|| a_plus_gate(rule, profile))
        .or_else(|| subject_floor_gate(rule, profile))
        .or_else(|| cocurricular_gate(rule, attrs))
}

fn region_gate(rule: &ScholarshipRule, attrs: &StudentAttributes) -> Option<Disqualifier> {
    match rule.state_requirement {
        StateRequirement::Only(required) if !rule.state_requirement.admits(attrs.state) => {
            Some(Disqualifier::RegionMismatch {
                required,
                actual: attrs.state,
            })
        }
        _ => None,
    }
}

fn religion_gate(rule: &ScholarshipRule, attrs: &StudentAttributes) -> Option<Disqualifier> {
    (rule.muslim_required && !attrs.is_muslim).then_some(Disqualifier::MuslimOnly)
}

fn ethnicity_gate(rule: &ScholarshipRule, attrs: &StudentAttributes) -> Option<Disqualifier> {
    (rule.bumiputera_required && !attrs.is_bumiputera).then_some(Disqualifier::BumiputeraOnly)
}

fn grade_threshold_gate(rule: &ScholarshipRule, profile: &GradeProfile) -> Option<Disqualifier> {
    let actual = profile.aggregate_a(rule.allow_a_minus);
    (actual < rule.min_a_total).then(|| Disqualifier::InsufficientAGrades {
        required: rule.min_a_total,
        actual,
        a_minus_counted: rule.allow_a_minus,
    })
}

fn hard_requirement_gate(rule: &ScholarshipRule, profile: &GradeProfile) -> Option<Disqualifier> {
    rule.hard_requirements
        .iter()
        .find_map(|(subject, accepted)| {
            let actual = profile.grade(subject);
            let satisfied = actual.map(|grade| accepted.contains(&grade)).unwrap_or(false);
            (!satisfied).then(|| Disqualifier::SubjectRequirement {
                subject: subject.clone(),
                accepted: accepted.clone(),
                actual,
            })
        })
}

fn science_core_gate(rule: &ScholarshipRule, profile: &GradeProfile) -> Option<Disqualifier> {
    if !rule.extra_science_gate {
        return None;
    }
    SCIENCE_CORE_SUBJECTS.iter().find_map(|subject| {
        let actual = profile.grade(subject);
        let satisfied = actual.map(Grade::is_strict_a).unwrap_or(false);
        (!satisfied).then(|| Disqualifier::ScienceCore {
            subject: subject.to_string(),
            actual,
        })
    })
}

fn a_plus_gate(rule: &ScholarshipRule, profile: &GradeProfile) -> Option<Disqualifier> {
    if rule.min_a_plus == 0 {
        return None;
    }
    let actual = profile.count_a_plus();
    (actual < rule.min_a_plus).then_some(Disqualifier::InsufficientAPlus {
        required: rule.min_a_plus,
        actual,
    })
}

fn subject_floor_gate(rule: &ScholarshipRule, profile: &GradeProfile) -> Option<Disqualifier> {
    if !rule.require_all_subjects_at_least_a_minus {
        return None;
    }
    profile
        .grades()
        .find(|(_, grade)| !grade.is_loose_a())
        .map(|(subject, grade)| Disqualifier::GradeBelowFloor {
            subject: subject.to_string(),
            grade,
        })
}

fn cocurricular_gate(rule: &ScholarshipRule, attrs: &StudentAttributes) -> Option<Disqualifier> {
    (attrs.cocurricular_score < rule.min_cocurricular).then_some(
        Disqualifier::CocurricularBelowMinimum {
            required: rule.min_cocurricular,
            actual: attrs.cocurricular_score,
        },
    )
}
