use super::common::*;
use crate::eligibility::grades::{build_profile, Grade, GradeEntry, GradeProfile};

#[test]
fn empty_input_builds_empty_profile() {
    let profile = build_profile(&[]);

    assert!(profile.is_empty());
    assert_eq!(profile.count_a_plus(), 0);
    assert_eq!(profile.count_a_strict(), 0);
    assert_eq!(profile.count_a_loose(), 0);
}

#[test]
fn repeated_subject_keeps_last_grade_and_counts_once() {
    let profile = GradeProfile::build(&[
        entry("Matematik", Grade::APlus),
        entry("Matematik", Grade::C),
    ]);

    assert_eq!(profile.subject_count(), 1);
    assert_eq!(profile.grade("Matematik"), Some(Grade::C));
    assert_eq!(profile.count_a_plus(), 0);
    assert_eq!(profile.count_a_loose(), 0);
}

#[test]
fn repeated_subject_upgrade_is_not_double_counted() {
    let profile = GradeProfile::build(&[
        entry("Fizik", Grade::A),
        entry("Fizik", Grade::APlus),
    ]);

    assert_eq!(profile.count_a_plus(), 1);
    assert_eq!(profile.count_a_strict(), 1);
    assert_eq!(profile.count_a_loose(), 1);
}

#[test]
fn unselected_cells_are_ignored() {
    let profile = GradeProfile::build(&[
        GradeEntry {
            subject: None,
            grade: Some(Grade::APlus),
        },
        GradeEntry {
            subject: Some("Kimia".to_string()),
            grade: None,
        },
        GradeEntry::default(),
        entry("Biologi", Grade::AMinus),
    ]);

    assert_eq!(profile.subject_count(), 1);
    assert_eq!(profile.grade("Kimia"), None);
    assert_eq!(profile.count_a_plus(), 0);
    assert_eq!(profile.count_a_loose(), 1);
}

#[test]
fn unselected_grade_does_not_erase_earlier_entry() {
    let profile = GradeProfile::build(&[
        entry("Sejarah", Grade::A),
        GradeEntry {
            subject: Some("Sejarah".to_string()),
            grade: None,
        },
    ]);

    assert_eq!(profile.grade("Sejarah"), Some(Grade::A));
}

#[test]
fn counters_follow_grade_bands() {
    let profile = form_profile();

    assert_eq!(profile.count_a_plus(), 2);
    assert_eq!(profile.count_a_strict(), 4);
    assert_eq!(profile.count_a_loose(), 5);
    assert_eq!(profile.aggregate_a(false), 4);
    assert_eq!(profile.aggregate_a(true), 5);
}

#[test]
fn grades_parse_from_labels() {
    assert_eq!("A+".parse::<Grade>(), Ok(Grade::APlus));
    assert_eq!(" a- ".parse::<Grade>(), Ok(Grade::AMinus));
    assert_eq!("G".parse::<Grade>(), Ok(Grade::G));
    assert!("A++".parse::<Grade>().is_err());
    assert!("F".parse::<Grade>().is_err());
}

#[test]
fn grades_serialize_as_labels() {
    let json = serde_json::to_string(&[Grade::APlus, Grade::BPlus, Grade::C]).expect("serializes");
    assert_eq!(json, r#"["A+","B+","C"]"#);
}
