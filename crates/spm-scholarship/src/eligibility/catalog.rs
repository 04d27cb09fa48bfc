use std::collections::{BTreeMap, HashSet};
use std::io;
use std::sync::OnceLock;

use serde::Serialize;

use super::domain::{FieldOfStudy, IncomeTier, ScholarshipRule};
use super::grades::Grade;
use super::region::{Region, StateRequirement};
use super::subjects::is_recognized_subject;

const TOP: &[Grade] = &[Grade::APlus, Grade::A];
const A_RANGE: &[Grade] = &[Grade::APlus, Grade::A, Grade::AMinus];
const SARAWAK_BM_PASS: &[Grade] = &[
    Grade::APlus,
    Grade::A,
    Grade::AMinus,
    Grade::BPlus,
    Grade::B,
    Grade::C,
];

static CATALOG: OnceLock<Vec<ScholarshipRule>> = OnceLock::new();

/// The built-in scholarship table, most prestigious awards first.
pub fn scholarship_catalog() -> &'static [ScholarshipRule] {
    CATALOG.get_or_init(build_catalog)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn requirements(pairs: &[(&str, &[Grade])]) -> BTreeMap<String, Vec<Grade>> {
    pairs
        .iter()
        .map(|(subject, grades)| (subject.to_string(), grades.to_vec()))
        .collect()
}

fn only(note: &str) -> Option<FieldOfStudy> {
    Some(FieldOfStudy::Only(note.to_string()))
}

fn link(url: &str) -> Option<String> {
    Some(url.to_string())
}

fn state_rule(name: &str, provider: &str, region: Region) -> ScholarshipRule {
    ScholarshipRule {
        state_requirement: StateRequirement::Only(region),
        tags: vec![format!("{} residents", region.label())],
        ..ScholarshipRule::open(name, provider)
    }
}

fn build_catalog() -> Vec<ScholarshipRule> {
    const JPA_PORTAL: &str = "https://esilav2.jpa.gov.my/";

    vec![
        // National and JPA awards.
        ScholarshipRule {
            tags: tags(&["Global top 10", "Full funding"]),
            description: "JPA's flagship award, fully funding study at a global top 10 university. Interview required.".to_string(),
            link: link(JPA_PORTAL),
            min_a_total: 9,
            allow_a_minus: false,
            min_a_plus: 9,
            hard_requirements: requirements(&[("Bahasa Melayu", TOP), ("Sejarah", TOP)]),
            require_all_subjects_at_least_a_minus: true,
            field_of_study: Some(FieldOfStudy::Excludes(
                "Medicine, Dentistry, Pharmacy".to_string(),
            )),
            min_cocurricular: 8.5,
            ..ScholarshipRule::open("JPA Program Penajaan Nasional (PPN)", "JPA")
        },
        ScholarshipRule {
            tags: tags(&["Top local universities", "GLU/IPTS"]),
            description: "Funds foundation and degree study at leading local universities such as UTP, UNITEN, MMU and IMU.".to_string(),
            link: link(JPA_PORTAL),
            min_a_total: 9,
            allow_a_minus: false,
            min_a_plus: 9,
            hard_requirements: requirements(&[("Bahasa Melayu", TOP), ("Sejarah", TOP)]),
            min_cocurricular: 8.0,
            ..ScholarshipRule::open("JPA LSPM (Program Khas Dalam Negara)", "JPA")
        },
        ScholarshipRule {
            tags: tags(&["Medical track"]),
            description: "Dedicated funding for medicine, dentistry and pharmacy. Government service bond applies.".to_string(),
            link: link(JPA_PORTAL),
            min_a_total: 9,
            allow_a_minus: false,
            min_a_plus: 7,
            hard_requirements: requirements(&[
                ("Biologi", TOP),
                ("Kimia", TOP),
                ("Fizik", TOP),
                ("Matematik", TOP),
            ]),
            field_of_study: only("Medicine, Dentistry, Pharmacy"),
            min_cocurricular: 8.0,
            ..ScholarshipRule::open("JPA PPF (Perubatan/Pergigian/Farmasi)", "JPA")
        },
        // Counts A- toward its threshold and carries the science core gate.
        ScholarshipRule {
            tags: tags(&["Engineering", "Japan/Korea/France/Germany"]),
            description: "Engineering and technology study in Japan, Korea, France or Germany, including a language preparatory year.".to_string(),
            link: link(JPA_PORTAL),
            min_a_total: 7,
            allow_a_minus: true,
            min_a_plus: 5,
            hard_requirements: requirements(&[
                ("Matematik", TOP),
                ("Matematik Tambahan", TOP),
                ("Fizik", TOP),
            ]),
            extra_science_gate: true,
            field_of_study: only("Engineering, Science/Technology"),
            min_cocurricular: 8.0,
            ..ScholarshipRule::open("JPA JKPJ (Japan/Korea/France/Germany Engineering)", "JPA")
        },
        // Corporate and overseas awards.
        ScholarshipRule {
            tags: tags(&["Oil & gas/Engineering", "Job placement"]),
            description: "Graduates join Petronas. Leadership carries heavy weight.".to_string(),
            link: link("https://educationsponsorship.petronas.com.my/"),
            min_a_total: 8,
            allow_a_minus: false,
            min_a_plus: 4,
            hard_requirements: requirements(&[("Matematik", TOP), ("Bahasa Inggeris", TOP)]),
            field_of_study: Some(FieldOfStudy::Excludes("Medicine, Education".to_string())),
            min_cocurricular: 8.5,
            ..ScholarshipRule::open("Petronas PESP", "Petronas")
        },
        ScholarshipRule {
            tags: tags(&["Engineering/Geoscience", "Full funding"]),
            description: "Fully funded Shell scholarship with a virtual job assessment.".to_string(),
            link: link("https://www.shell.com.my/careers/students-and-graduates/scholarships.html"),
            min_a_total: 8,
            allow_a_minus: false,
            field_of_study: only("Engineering, Geoscience, Commercial"),
            min_cocurricular: 8.0,
            ..ScholarshipRule::open("Shell Malaysia Scholarship", "Shell")
        },
        ScholarshipRule {
            tags: tags(&["Singapore", "A-Level", "Full funding"]),
            description: "Fully funded pre-university (A-Level) study in Singapore. English weighs heavily.".to_string(),
            link: link("https://www.moe.gov.sg/financial-matters/awards-scholarships/asean-scholarship/malaysia"),
            min_a_total: 8,
            allow_a_minus: false,
            min_a_plus: 6,
            hard_requirements: requirements(&[("Bahasa Inggeris", TOP)]),
            min_cocurricular: 8.5,
            ..ScholarshipRule::open("Singapore ASEAN Scholarship", "MOE Singapore")
        },
        ScholarshipRule {
            tags: tags(&["Finance/Technology", "Data science"]),
            description: "Covers finance and technology fields, with mentoring and a direct employment path.".to_string(),
            link: link("https://www.cimb.com/en/careers/students/cimb-asean-scholarship.html"),
            min_a_total: 8,
            allow_a_minus: false,
            min_cocurricular: 8.5,
            ..ScholarshipRule::open("CIMB ASEAN Scholarship", "CIMB")
        },
        ScholarshipRule {
            tags: tags(&["Economics/Law", "Elite"]),
            description: "Central bank scholarship. Pure medicine or engineering is not funded unless fintech related.".to_string(),
            link: link("https://www.bnm.gov.my/careers/scholarships"),
            min_a_total: 8,
            allow_a_minus: false,
            min_a_plus: 8,
            field_of_study: only("Economics, Accounting, Finance, Law"),
            min_cocurricular: 8.5,
            ..ScholarshipRule::open("Bank Negara Kijang Scholarship", "Bank Negara")
        },
        ScholarshipRule {
            tags: tags(&["Future leaders", "GLC"]),
            description: "Develops future GLC leaders. Co-curricular record and leadership weigh heavily.".to_string(),
            link: link("https://www.yayasankhazanah.com.my/"),
            min_a_total: 8,
            allow_a_minus: false,
            min_cocurricular: 9.0,
            ..ScholarshipRule::open("Khazanah Global Scholarship", "Yayasan Khazanah")
        },
        ScholarshipRule {
            tags: tags(&["Engineering/Business", "KYUEM"]),
            description: "A first choice for international engineering, including a place at KYUEM.".to_string(),
            link: link("https://yayasanuem.org/scholarships/"),
            min_a_total: 7,
            allow_a_minus: false,
            hard_requirements: requirements(&[("Bahasa Inggeris", TOP), ("Matematik", TOP)]),
            min_cocurricular: 8.0,
            ..ScholarshipRule::open("Yayasan UEM Overseas", "Yayasan UEM")
        },
        ScholarshipRule {
            tags: tags(&["Construction", "Engineering"]),
            description: "Graduates join Gamuda. Character and communication count.".to_string(),
            link: link("https://gamuda.com.my/sustainability/yayasan-gamuda/gamuda-scholarship/"),
            min_a_total: 7,
            min_cocurricular: 8.0,
            ..ScholarshipRule::open("Gamuda Scholarship", "Gamuda")
        },
        ScholarshipRule {
            tags: tags(&["Local private universities", "Heriot-Watt"]),
            description: "Covers fees at local private universities such as Heriot-Watt and UNITEN.".to_string(),
            link: link("https://ytlfoundation.com/scholarship-programme/"),
            min_a_total: 6,
            min_cocurricular: 7.0,
            ..ScholarshipRule::open("YTL Foundation Scholarship", "YTL")
        },
        // MARA and Bumiputera awards.
        ScholarshipRule {
            tags: tags(&["Bumiputera only", "B40 priority"]),
            description: "Route to overseas or top private universities, prioritising B40/M40 households.".to_string(),
            link: link("https://www.mara.gov.my/"),
            min_a_total: 5,
            min_cocurricular: 6.0,
            bumiputera_required: true,
            income_requirement: Some(IncomeTier::B40),
            ..ScholarshipRule::open("MARA Young Talent (YTP)", "MARA")
        },
        ScholarshipRule {
            tags: tags(&["Bumiputera only", "Private universities"]),
            description: "Funds study at local private universities (IPTS) for Bumiputera students.".to_string(),
            link: link("https://www.mara.gov.my/"),
            min_a_total: 5,
            min_cocurricular: 6.0,
            bumiputera_required: true,
            ..ScholarshipRule::open("MARA TESP", "MARA")
        },
        ScholarshipRule {
            tags: tags(&["Bumiputera only", "Professional certification"]),
            description: "Fast track to professional certification for Bumiputera students.".to_string(),
            link: link("https://yayasanpeneraju.com.my/"),
            min_a_total: 5,
            hard_requirements: requirements(&[
                ("Matematik", A_RANGE),
                ("Bahasa Inggeris", A_RANGE),
            ]),
            field_of_study: only("Accounting/Finance (ACCA/CFA)"),
            min_cocurricular: 6.0,
            bumiputera_required: true,
            ..ScholarshipRule::open("Yayasan Peneraju Profesional", "Peneraju")
        },
        // State foundations.
        ScholarshipRule {
            description: "Interest-free study loan, waived for a CGPA of 3.75 or above.".to_string(),
            link: link("https://yayasanselangor.org.my/"),
            min_a_total: 5,
            ..state_rule("Yayasan Selangor (Pinjaman)", "Yayasan Selangor", Region::Selangor)
        },
        ScholarshipRule {
            tags: tags(&["Sarawak residents", "STEM"]),
            description: "Sarawak's top award, STEM preferred. Includes a hybrid loan-scholarship.".to_string(),
            link: link("https://yayasansarawak.org.my/"),
            min_a_total: 6,
            hard_requirements: requirements(&[("Bahasa Melayu", SARAWAK_BM_PASS)]),
            ..state_rule("Yayasan Sarawak Tun Taib", "Yayasan Sarawak", Region::Sarawak)
        },
        ScholarshipRule {
            description: "Sabah state excellence scholarship (BKNS).".to_string(),
            link: link("https://biasiswa.sabah.gov.my/"),
            min_a_total: 5,
            min_cocurricular: 6.0,
            ..state_rule("Biasiswa Kerajaan Negeri Sabah", "Kerajaan Sabah", Region::Sabah)
        },
        ScholarshipRule {
            description: "Johor state funding, awarded as a scholarship or loan depending on results.".to_string(),
            link: link("http://ypj.gov.my/"),
            min_a_total: 5,
            min_cocurricular: 5.0,
            ..state_rule("YPJ Biasiswa/Pinjaman", "YPJ", Region::Johor)
        },
        ScholarshipRule {
            tags: tags(&["Terengganu residents", "Elite"]),
            description: "Terengganu elite scholarship. Parents must be from Terengganu.".to_string(),
            link: link("http://yt.gov.my/"),
            min_a_total: 8,
            hard_requirements: requirements(&[
                ("Bahasa Melayu", A_RANGE),
                ("Bahasa Inggeris", A_RANGE),
            ]),
            min_cocurricular: 7.0,
            ..state_rule("Yayasan Terengganu (Biasiswa)", "Yayasan Terengganu", Region::Terengganu)
        },
        ScholarshipRule {
            description: "Pahang education support covering scholarships and loans.".to_string(),
            link: link("https://www.yp.org.my/"),
            min_a_total: 5,
            min_cocurricular: 6.0,
            ..state_rule("Yayasan Pahang (Skim Pelajar Cemerlang)", "Yayasan Pahang", Region::Pahang)
        },
        ScholarshipRule {
            tags: tags(&["Perak residents", "One-off"]),
            description: "RM500-RM1000 grant on university admission, B40 households first.".to_string(),
            link: link("https://yayasanperak.gov.my/"),
            min_a_total: 3,
            income_requirement: Some(IncomeTier::B40),
            ..state_rule("Yayasan Perak (Insentif)", "Yayasan Perak", Region::Perak)
        },
        ScholarshipRule {
            description: "Negeri Sembilan education support.".to_string(),
            link: link("https://yns.gov.my/"),
            min_a_total: 5,
            ..state_rule("Yayasan Negeri Sembilan", "Yayasan NS", Region::NegeriSembilan)
        },
        ScholarshipRule {
            description: "Study loan from the Melaka education trust fund (TAPEM).".to_string(),
            link: link("https://tapem.melaka.gov.my/"),
            min_a_total: 4,
            ..state_rule("Yayasan Melaka (TAPEM)", "TAPEM", Region::Melaka)
        },
        ScholarshipRule {
            description: "Education assistance from the Kelantan foundation.".to_string(),
            link: link("http://www.yakin.kelantan.gov.my/"),
            min_a_total: 5,
            ..state_rule("Yayasan Kelantan (YAKIN)", "YAKIN", Region::Kelantan)
        },
        // Private, vocational and other awards.
        ScholarshipRule {
            tags: tags(&["Private universities", "Full tuition"]),
            description: "Sin Chew education fund, full-tuition scholarships at private universities.".to_string(),
            link: link("https://scedufund.sinchew.com.my/"),
            min_a_total: 5,
            min_cocurricular: 6.0,
            ..ScholarshipRule::open("Sin Chew Education Fund", "Sin Chew")
        },
        ScholarshipRule {
            tags: tags(&["Financial need", "Politeknik"]),
            description: "Supports polytechnic students, with household need taken into account.".to_string(),
            link: link("https://kuokfoundation.com/"),
            min_a_total: 4,
            min_cocurricular: 5.0,
            income_requirement: Some(IncomeTier::B40),
            ..ScholarshipRule::open("Kuok Foundation (Polytechnic)", "Kuok Foundation")
        },
        ScholarshipRule {
            tags: tags(&["Teacher training", "Civil service"]),
            description: "Graduates become public school teachers. UKCG psychometric test required.".to_string(),
            link: link("https://pismp.moe.gov.my/"),
            min_a_total: 5,
            hard_requirements: requirements(&[("Bahasa Melayu", A_RANGE), ("Sejarah", A_RANGE)]),
            field_of_study: only("Education"),
            min_cocurricular: 7.0,
            ..ScholarshipRule::open("KPM PISMP (Teacher Training)", "KPM")
        },
        ScholarshipRule {
            tags: tags(&["B40 priority", "TVET"]),
            description: "Funds TVET and polytechnic programmes, B40 households first.".to_string(),
            link: link(JPA_PORTAL),
            min_a_total: 3,
            min_cocurricular: 4.0,
            income_requirement: Some(IncomeTier::B40),
            ..ScholarshipRule::open("JPA Dermasiswa B40 (TVET)", "JPA")
        },
        ScholarshipRule {
            tags: tags(&["Skills training", "SKM"]),
            description: "Loans and living allowance for SKM skills training. Low entry bar.".to_string(),
            link: link("https://www.ptpk.gov.my/"),
            ..ScholarshipRule::open("PTPK (Pinjaman Latihan Kemahiran)", "PTPK")
        },
    ]
}

/// Broken invariants in a scholarship table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("scholarship '{rule}' requires unrecognized subject '{subject}'")]
    UnknownSubject { rule: String, subject: String },
    #[error("scholarship '{rule}' accepts no grades for '{subject}'")]
    EmptyAcceptedGrades { rule: String, subject: String },
    #[error("scholarship '{rule}' requires {min_a_plus} A+ but only {min_a_total} A grades")]
    APlusExceedsTotal {
        rule: String,
        min_a_plus: u32,
        min_a_total: u32,
    },
    #[error("scholarship '{0}' appears more than once")]
    DuplicateName(String),
}

pub fn validate_catalog(rules: &[ScholarshipRule]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.name.as_str()) {
            return Err(CatalogError::DuplicateName(rule.name.clone()));
        }

        for (subject, accepted) in &rule.hard_requirements {
            if !is_recognized_subject(subject) {
                return Err(CatalogError::UnknownSubject {
                    rule: rule.name.clone(),
                    subject: subject.clone(),
                });
            }
            if accepted.is_empty() {
                return Err(CatalogError::EmptyAcceptedGrades {
                    rule: rule.name.clone(),
                    subject: subject.clone(),
                });
            }
        }

        if rule.min_a_plus > 0 && rule.min_a_plus > rule.min_a_total {
            return Err(CatalogError::APlusExceedsTotal {
                rule: rule.name.clone(),
                min_a_plus: rule.min_a_plus,
                min_a_total: rule.min_a_total,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    name: &'a str,
    provider: &'a str,
    state: &'static str,
    min_a_total: u32,
    allow_a_minus: bool,
    min_a_plus: u32,
    hard_requirements: String,
    all_subjects_a_minus: bool,
    science_core: bool,
    min_cocurricular: f32,
    muslim_required: bool,
    bumiputera_required: bool,
    income_priority: String,
    field_of_study: String,
    link: &'a str,
}

impl<'a> From<&'a ScholarshipRule> for CatalogRow<'a> {
    fn from(rule: &'a ScholarshipRule) -> Self {
        let hard_requirements = rule
            .hard_requirements
            .iter()
            .map(|(subject, grades)| {
                let labels: Vec<&str> = grades.iter().map(|grade| grade.label()).collect();
                format!("{subject}: {}", labels.join("/"))
            })
            .collect::<Vec<_>>()
            .join("; ");

        let field_of_study = match &rule.field_of_study {
            Some(FieldOfStudy::Only(note)) => format!("only {note}"),
            Some(FieldOfStudy::Excludes(note)) => format!("excludes {note}"),
            None => String::new(),
        };

        Self {
            name: &rule.name,
            provider: &rule.provider,
            state: rule.state_requirement.label(),
            min_a_total: rule.min_a_total,
            allow_a_minus: rule.allow_a_minus,
            min_a_plus: rule.min_a_plus,
            hard_requirements,
            all_subjects_a_minus: rule.require_all_subjects_at_least_a_minus,
            science_core: rule.extra_science_gate,
            min_cocurricular: rule.min_cocurricular,
            muslim_required: rule.muslim_required,
            bumiputera_required: rule.bumiputera_required,
            income_priority: rule
                .income_requirement
                .map(|tier| tier.to_string())
                .unwrap_or_default(),
            field_of_study,
            link: rule.link.as_deref().unwrap_or_default(),
        }
    }
}

/// Write the table as CSV, one row per scholarship in catalog order.
pub fn export_csv<W: io::Write>(rules: &[ScholarshipRule], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for rule in rules {
        writer.serialize(CatalogRow::from(rule))?;
    }
    writer.flush()?;
    Ok(())
}
