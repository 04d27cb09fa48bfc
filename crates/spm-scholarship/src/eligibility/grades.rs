use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// SPM grade, listed from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "G")]
    G,
}

impl Grade {
    pub const ALL: [Grade; 10] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::G,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::G => "G",
        }
    }

    /// A+ or A.
    pub fn is_strict_a(self) -> bool {
        matches!(self, Grade::APlus | Grade::A)
    }

    /// A+, A, or A-.
    pub fn is_loose_a(self) -> bool {
        matches!(self, Grade::APlus | Grade::A | Grade::AMinus)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized SPM grade '{0}'")]
pub struct UnknownGrade(pub String);

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownGrade(raw.to_string()))
    }
}

/// One row of the grade form. `None` on either side marks an unselected cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade: Option<Grade>,
}

impl GradeEntry {
    pub fn new(subject: impl Into<String>, grade: Grade) -> Self {
        Self {
            subject: Some(subject.into()),
            grade: Some(grade),
        }
    }
}

/// Deduplicated subject grades plus the aggregate A counters rules are measured against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradeProfile {
    grades: BTreeMap<String, Grade>,
    count_a_plus: u32,
    count_a_strict: u32,
    count_a_loose: u32,
}

impl GradeProfile {
    /// Fold form rows into a profile. Unselected rows are skipped and a repeated
    /// subject keeps the grade from its last row; counters come from the folded map.
    pub fn build(entries: &[GradeEntry]) -> Self {
        let mut grades = BTreeMap::new();
        for entry in entries {
            if let (Some(subject), Some(grade)) = (&entry.subject, entry.grade) {
                grades.insert(subject.clone(), grade);
            }
        }

        let mut count_a_plus = 0;
        let mut count_a_strict = 0;
        let mut count_a_loose = 0;
        for grade in grades.values() {
            if *grade == Grade::APlus {
                count_a_plus += 1;
            }
            if grade.is_strict_a() {
                count_a_strict += 1;
            }
            if grade.is_loose_a() {
                count_a_loose += 1;
            }
        }

        Self {
            grades,
            count_a_plus,
            count_a_strict,
            count_a_loose,
        }
    }

    pub fn grade(&self, subject: &str) -> Option<Grade> {
        self.grades.get(subject).copied()
    }

    pub fn grades(&self) -> impl Iterator<Item = (&str, Grade)> + '_ {
        self.grades
            .iter()
            .map(|(subject, grade)| (subject.as_str(), *grade))
    }

    pub fn subject_count(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn count_a_plus(&self) -> u32 {
        self.count_a_plus
    }

    pub fn count_a_strict(&self) -> u32 {
        self.count_a_strict
    }

    pub fn count_a_loose(&self) -> u32 {
        self.count_a_loose
    }

    /// Aggregate A count, with A- included when `allow_a_minus` is set.
    pub fn aggregate_a(&self, allow_a_minus: bool) -> u32 {
        if allow_a_minus {
            self.count_a_loose
        } else {
            self.count_a_strict
        }
    }
}

pub fn build_profile(entries: &[GradeEntry]) -> GradeProfile {
    GradeProfile::build(entries)
}
