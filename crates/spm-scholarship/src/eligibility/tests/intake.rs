use super::common::*;
use crate::eligibility::grades::{Grade, GradeEntry};
use crate::eligibility::intake::{
    IntakeError, IntakeGuard, IntakePolicy, StudentSubmission, SubmittedGrade,
};
use crate::eligibility::region::Region;
use crate::eligibility::service::EligibilityService;

#[test]
fn guard_converts_form_rows_to_typed_entries() {
    let request = IntakeGuard::default()
        .accept(&form_submission())
        .expect("submission accepted");

    assert_eq!(request.entries.len(), 5);
    assert_eq!(request.entries[0], GradeEntry::new("Bahasa Melayu", Grade::APlus));
    assert_eq!(request.attributes.state, Some(Region::Selangor));
    assert_eq!(request.attributes.cocurricular_score, 8.5);
}

#[test]
fn blank_cells_become_unselected() {
    let submission = StudentSubmission {
        grades: vec![
            SubmittedGrade {
                subject: Some("  ".to_string()),
                grade: Some("A".to_string()),
            },
            SubmittedGrade {
                subject: Some("Kimia".to_string()),
                grade: None,
            },
        ],
        state: Some(String::new()),
        ..form_submission()
    };

    let request = IntakeGuard::default()
        .accept(&submission)
        .expect("submission accepted");

    assert_eq!(request.attributes.state, None);
    assert_eq!(
        request.entries,
        vec![
            GradeEntry {
                subject: None,
                grade: Some(Grade::A),
            },
            GradeEntry {
                subject: Some("Kimia".to_string()),
                grade: None,
            },
        ]
    );
}

#[test]
fn guard_rejects_unknown_values() {
    let guard = IntakeGuard::default();

    let bad_state = StudentSubmission {
        state: Some("Singapore".to_string()),
        ..form_submission()
    };
    assert!(matches!(
        guard.accept(&bad_state),
        Err(IntakeError::UnknownState(_))
    ));

    let mut bad_subject = form_submission();
    bad_subject.grades.push(SubmittedGrade::new("Astronomi", "A"));
    assert_eq!(
        guard.accept(&bad_subject),
        Err(IntakeError::UnknownSubject("Astronomi".to_string()))
    );

    let mut bad_grade = form_submission();
    bad_grade.grades.push(SubmittedGrade::new("Kimia", "F"));
    assert!(matches!(
        guard.accept(&bad_grade),
        Err(IntakeError::UnknownGrade(_))
    ));
}

#[test]
fn guard_rejects_out_of_range_cocurricular_scores() {
    let guard = IntakeGuard::default();
    for score in [-0.5, 10.01, f32::NAN] {
        let submission = StudentSubmission {
            cocurricular_score: score,
            ..form_submission()
        };
        assert!(matches!(
            guard.accept(&submission),
            Err(IntakeError::CocurricularOutOfRange(_))
        ));
    }

    let perfect = StudentSubmission {
        cocurricular_score: 10.0,
        ..form_submission()
    };
    assert!(guard.accept(&perfect).is_ok());
}

#[test]
fn duplicate_subjects_overwrite_by_default() {
    let mut submission = form_submission();
    submission.grades.push(SubmittedGrade::new("Matematik", "C"));

    let report = EligibilityService::default()
        .check(&submission)
        .expect("duplicates tolerated");

    assert_eq!(report.counts.subjects, 5);
    assert_eq!(report.counts.a_plus, 1);
}

#[test]
fn duplicate_subjects_rejected_when_policy_requires() {
    let guard = IntakeGuard::with_policy(IntakePolicy {
        reject_duplicate_subjects: true,
    });
    let mut submission = form_submission();
    submission.grades.push(SubmittedGrade::new("Matematik", "C"));

    assert_eq!(
        guard.accept(&submission),
        Err(IntakeError::DuplicateSubject("Matematik".to_string()))
    );
}

#[test]
fn service_report_carries_counts_brief_and_optional_rejections() {
    let service = EligibilityService::default();

    let report = service.check(&form_submission()).expect("report builds");
    assert_eq!(report.counts.a_plus, 2);
    assert_eq!(report.counts.a_strict, 4);
    assert_eq!(report.counts.a_loose, 5);
    assert_eq!(report.eligible_names()[0], "Yayasan Selangor (Pinjaman)");
    assert!(report.rejected.is_none());
    assert!(report
        .advisory_brief
        .contains("Eligible scholarships (6): Yayasan Selangor (Pinjaman)"));

    let explained = service
        .check(&StudentSubmission {
            explain: true,
            ..form_submission()
        })
        .expect("report builds");
    let rejected = explained.rejected.expect("rejections listed");
    assert_eq!(rejected.len() + explained.eligible.len(), service.catalog().len());
    assert_eq!(rejected[0].name, "JPA Program Penajaan Nasional (PPN)");
    assert_eq!(rejected[0].summary, "needs 9 A+/A grades, has 4");
}

#[test]
fn advisory_brief_handles_no_matches() {
    let submission = StudentSubmission {
        state: None,
        cocurricular_score: 0.0,
        grades: Vec::new(),
        ..form_submission()
    };

    let report = EligibilityService::default()
        .check(&submission)
        .expect("report builds");

    assert_eq!(report.eligible_names(), vec!["PTPK (Pinjaman Latihan Kemahiran)"]);
    assert!(report.advisory_brief.starts_with("Student from an unspecified state"));
}
