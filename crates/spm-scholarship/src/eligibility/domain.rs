use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::grades::Grade;
use super::region::{Region, StateRequirement};

/// Non-grade facts about the student collected alongside the grade form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentAttributes {
    pub state: Option<Region>,
    pub is_muslim: bool,
    pub is_bumiputera: bool,
    /// Co-curricular (koko) score on the 0-10 scale.
    pub cocurricular_score: f32,
}

/// Household income band a scholarship gives priority to. Shown to the student, never gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeTier {
    B40,
}

impl fmt::Display for IncomeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomeTier::B40 => f.write_str("B40"),
        }
    }
}

/// Fields of study a scholarship funds or refuses. Shown to the student, never gated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOfStudy {
    Only(String),
    Excludes(String),
}

/// One scholarship and the conditions a student has to meet for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipRule {
    pub name: String,
    pub provider: String,
    pub tags: Vec<String>,
    pub description: String,
    pub link: Option<String>,
    /// Minimum number of A grades, counted per `allow_a_minus`.
    pub min_a_total: u32,
    pub allow_a_minus: bool,
    /// Minimum number of A+ grades; zero disables the check.
    pub min_a_plus: u32,
    /// Subject to accepted grades. A missing subject never satisfies its entry.
    pub hard_requirements: BTreeMap<String, Vec<Grade>>,
    /// Every recorded subject must be A- or better.
    pub require_all_subjects_at_least_a_minus: bool,
    /// Matematik, Matematik Tambahan and Fizik must each be A+ or A.
    pub extra_science_gate: bool,
    pub field_of_study: Option<FieldOfStudy>,
    pub min_cocurricular: f32,
    pub state_requirement: StateRequirement,
    pub muslim_required: bool,
    pub bumiputera_required: bool,
    pub income_requirement: Option<IncomeTier>,
}

impl ScholarshipRule {
    /// A rule with no conditions at all; catalog entries override the fields they constrain.
    pub fn open(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            tags: Vec::new(),
            description: String::new(),
            link: None,
            min_a_total: 0,
            allow_a_minus: true,
            min_a_plus: 0,
            hard_requirements: BTreeMap::new(),
            require_all_subjects_at_least_a_minus: false,
            extra_science_gate: false,
            field_of_study: None,
            min_cocurricular: 0.0,
            state_requirement: StateRequirement::All,
            muslim_required: false,
            bumiputera_required: false,
            income_requirement: None,
        }
    }
}
