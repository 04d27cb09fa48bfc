use crate::eligibility::domain::{ScholarshipRule, StudentAttributes};
use crate::eligibility::grades::{Grade, GradeEntry, GradeProfile};
use crate::eligibility::intake::{StudentSubmission, SubmittedGrade};
use crate::eligibility::region::Region;

pub(super) fn entry(subject: &str, grade: Grade) -> GradeEntry {
    GradeEntry::new(subject, grade)
}

pub(super) fn profile_of(grades: &[(&str, Grade)]) -> GradeProfile {
    let entries: Vec<GradeEntry> = grades
        .iter()
        .map(|(subject, grade)| entry(subject, *grade))
        .collect();
    GradeProfile::build(&entries)
}

/// The default rows of the grade form.
pub(super) fn form_profile() -> GradeProfile {
    profile_of(&[
        ("Bahasa Melayu", Grade::APlus),
        ("Bahasa Inggeris", Grade::A),
        ("Sejarah", Grade::AMinus),
        ("Matematik", Grade::APlus),
        ("Pendidikan Moral", Grade::A),
    ])
}

pub(super) fn selangor_student() -> StudentAttributes {
    StudentAttributes {
        state: Some(Region::Selangor),
        is_muslim: false,
        is_bumiputera: false,
        cocurricular_score: 8.5,
    }
}

/// Ten subjects, nine A+ plus Pendidikan Moral at the given grade.
pub(super) fn straight_a_plus_with_moral(moral: Grade) -> GradeProfile {
    profile_of(&[
        ("Bahasa Melayu", Grade::APlus),
        ("Bahasa Inggeris", Grade::APlus),
        ("Sejarah", Grade::APlus),
        ("Matematik", Grade::APlus),
        ("Matematik Tambahan", Grade::APlus),
        ("Fizik", Grade::APlus),
        ("Kimia", Grade::APlus),
        ("Biologi", Grade::APlus),
        ("Pendidikan Islam", Grade::APlus),
        ("Pendidikan Moral", moral),
    ])
}

pub(super) fn selangor_state_rule() -> ScholarshipRule {
    ScholarshipRule {
        min_a_total: 5,
        allow_a_minus: true,
        state_requirement: crate::eligibility::StateRequirement::Only(Region::Selangor),
        ..ScholarshipRule::open("Selangor State Award", "Yayasan Selangor")
    }
}

pub(super) fn form_submission() -> StudentSubmission {
    StudentSubmission {
        state: Some("Selangor".to_string()),
        muslim: false,
        bumiputera: false,
        cocurricular_score: 8.5,
        grades: vec![
            SubmittedGrade::new("Bahasa Melayu", "A+"),
            SubmittedGrade::new("Bahasa Inggeris", "A"),
            SubmittedGrade::new("Sejarah", "A-"),
            SubmittedGrade::new("Matematik", "A+"),
            SubmittedGrade::new("Pendidikan Moral", "A"),
        ],
        explain: false,
    }
}
