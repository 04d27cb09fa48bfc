use crate::eligibility::catalog::{export_csv, scholarship_catalog, validate_catalog, CatalogError};
use crate::eligibility::domain::ScholarshipRule;
use crate::eligibility::grades::Grade;
use crate::eligibility::region::{Region, StateRequirement};

#[test]
fn shipped_catalog_satisfies_invariants() {
    let catalog = scholarship_catalog();

    assert_eq!(catalog.len(), 31);
    validate_catalog(catalog).expect("built-in catalog is valid");
}

#[test]
fn catalog_opens_with_the_national_award_and_ends_with_skills_loans() {
    let catalog = scholarship_catalog();

    assert_eq!(catalog[0].name, "JPA Program Penajaan Nasional (PPN)");
    assert_eq!(
        catalog.last().map(|rule| rule.name.as_str()),
        Some("PTPK (Pinjaman Latihan Kemahiran)")
    );
}

#[test]
fn every_state_foundation_is_restricted_to_its_state() {
    let restricted: Vec<Region> = scholarship_catalog()
        .iter()
        .filter_map(|rule| match rule.state_requirement {
            StateRequirement::Only(region) => Some(region),
            StateRequirement::All => None,
        })
        .collect();

    assert_eq!(
        restricted,
        vec![
            Region::Selangor,
            Region::Sarawak,
            Region::Sabah,
            Region::Johor,
            Region::Terengganu,
            Region::Pahang,
            Region::Perak,
            Region::NegeriSembilan,
            Region::Melaka,
            Region::Kelantan,
        ]
    );
}

#[test]
fn validation_rejects_unknown_requirement_subjects() {
    let rule = ScholarshipRule {
        hard_requirements: [("Add Maths".to_string(), vec![Grade::APlus])]
            .into_iter()
            .collect(),
        ..ScholarshipRule::open("Typo Award", "Test")
    };

    assert_eq!(
        validate_catalog(&[rule]),
        Err(CatalogError::UnknownSubject {
            rule: "Typo Award".to_string(),
            subject: "Add Maths".to_string(),
        })
    );
}

#[test]
fn validation_rejects_a_plus_above_total() {
    let rule = ScholarshipRule {
        min_a_total: 5,
        min_a_plus: 6,
        ..ScholarshipRule::open("Inverted Award", "Test")
    };

    assert!(matches!(
        validate_catalog(&[rule]),
        Err(CatalogError::APlusExceedsTotal { min_a_plus: 6, min_a_total: 5, .. })
    ));
}

#[test]
fn validation_rejects_empty_accepted_sets_and_duplicate_names() {
    let empty = ScholarshipRule {
        hard_requirements: [("Sejarah".to_string(), Vec::new())].into_iter().collect(),
        ..ScholarshipRule::open("Empty Award", "Test")
    };
    assert!(matches!(
        validate_catalog(&[empty]),
        Err(CatalogError::EmptyAcceptedGrades { .. })
    ));

    let twice = vec![
        ScholarshipRule::open("Twin", "Test"),
        ScholarshipRule::open("Twin", "Test"),
    ];
    assert_eq!(
        validate_catalog(&twice),
        Err(CatalogError::DuplicateName("Twin".to_string()))
    );
}

#[test]
fn csv_export_writes_header_and_one_row_per_rule() {
    let mut buffer = Vec::new();
    export_csv(&scholarship_catalog()[..2], &mut buffer).expect("export succeeds");
    let text = String::from_utf8(buffer).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("name,provider,state,min_a_total"));
    assert!(lines[1].contains("Bahasa Melayu: A+/A; Sejarah: A+/A"));
    assert!(lines[1].contains("excludes Medicine"));
}
