use crate::infra::parse_grade_arg;
use chrono::Local;
use clap::{Args, ValueEnum};
use spm_scholarship::config::AppConfig;
use spm_scholarship::eligibility::{
    export_csv, scholarship_catalog, EligibilityReport, EligibilityService, FieldOfStudy,
    IntakePolicy, ScholarshipRule, StudentSubmission, SubmittedGrade,
};
use spm_scholarship::error::AppError;
use std::io;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// State of residence, e.g. "Selangor" or "W.P. Kuala Lumpur"
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// The student is Muslim
    #[arg(long)]
    pub(crate) muslim: bool,
    /// The student holds Bumiputera status
    #[arg(long)]
    pub(crate) bumiputera: bool,
    /// Co-curricular (koko) score between 0 and 10
    #[arg(long, default_value_t = 0.0)]
    pub(crate) koko: f32,
    /// Subject grade as SUBJECT=GRADE; repeat once per subject
    #[arg(long = "grade", value_parser = parse_grade_arg)]
    pub(crate) grades: Vec<SubmittedGrade>,
    /// Also list rejected scholarships and the first requirement each one failed
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum CatalogFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = CatalogFormat::Table)]
    pub(crate) format: CatalogFormat,
}

impl CheckArgs {
    fn submission(&self) -> StudentSubmission {
        StudentSubmission {
            state: self.state.clone(),
            muslim: self.muslim,
            bumiputera: self.bumiputera,
            cocurricular_score: self.koko,
            grades: self.grades.clone(),
            explain: self.explain,
        }
    }
}

pub(crate) fn run_check(args: CheckArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = EligibilityService::new(IntakePolicy::from(&config.eligibility));
    let report = service.check(&args.submission())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = scholarship_catalog();
    match args.format {
        CatalogFormat::Table => render_catalog(catalog),
        CatalogFormat::Json => println!("{}", serde_json::to_string_pretty(catalog)?),
        CatalogFormat::Csv => export_csv(catalog, io::stdout().lock())?,
    }
    Ok(())
}

fn field_note(rule: &ScholarshipRule) -> Option<String> {
    match &rule.field_of_study {
        Some(FieldOfStudy::Only(note)) => Some(format!("Field of study: {note}")),
        Some(FieldOfStudy::Excludes(note)) => Some(format!("Excluded fields: {note}")),
        None => None,
    }
}

fn render_report(report: &EligibilityReport) {
    println!("SPM scholarship check");
    println!(
        "Evaluated {}",
        report
            .generated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    println!(
        "Subjects: {} | A+: {} | A+/A: {} | A+/A/A-: {}",
        report.counts.subjects, report.counts.a_plus, report.counts.a_strict, report.counts.a_loose
    );

    if report.eligible.is_empty() {
        println!("\nEligible scholarships: none");
    } else {
        println!("\nEligible scholarships ({})", report.eligible.len());
        for rule in &report.eligible {
            println!("- {} ({})", rule.name, rule.provider);
            if !rule.tags.is_empty() {
                println!("  [{}]", rule.tags.join("] ["));
            }
            if !rule.description.is_empty() {
                println!("  {}", rule.description);
            }
            if let Some(note) = field_note(rule) {
                println!("  {note}");
            }
            if let Some(tier) = rule.income_requirement {
                println!("  {tier} households prioritised");
            }
            if let Some(link) = &rule.link {
                println!("  Verify: {link}");
            }
        }
    }

    if let Some(rejected) = &report.rejected {
        println!("\nNot eligible ({})", rejected.len());
        for item in rejected {
            println!("- {}: {}", item.name, item.summary);
        }
    }

    println!("\nAdvisory brief");
    println!("{}", report.advisory_brief);
}

fn render_catalog(catalog: &[ScholarshipRule]) {
    println!("Scholarship catalog ({} entries)", catalog.len());
    for rule in catalog {
        let counted = if rule.allow_a_minus { "A+/A/A-" } else { "A+/A" };
        let mut conditions = vec![format!("{} x {counted}", rule.min_a_total)];
        if rule.min_a_plus > 0 {
            conditions.push(format!("{} x A+", rule.min_a_plus));
        }
        if rule.min_cocurricular > 0.0 {
            conditions.push(format!("koko {:.1}", rule.min_cocurricular));
        }
        conditions.push(format!("state {}", rule.state_requirement.label()));
        if rule.bumiputera_required {
            conditions.push("Bumiputera".to_string());
        }
        if rule.muslim_required {
            conditions.push("Muslim".to_string());
        }
        println!("- {} ({}): {}", rule.name, rule.provider, conditions.join(", "));
    }
}
