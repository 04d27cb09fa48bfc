use metrics_exporter_prometheus::PrometheusHandle;
use spm_scholarship::eligibility::SubmittedGrade;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a `SUBJECT=GRADE` command-line pair, e.g. `Matematik Tambahan=A+`.
pub(crate) fn parse_grade_arg(raw: &str) -> Result<SubmittedGrade, String> {
    let (subject, grade) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected SUBJECT=GRADE, got '{raw}'"))?;

    let subject = subject.trim();
    let grade = grade.trim();
    if subject.is_empty() || grade.is_empty() {
        return Err(format!("expected SUBJECT=GRADE, got '{raw}'"));
    }

    Ok(SubmittedGrade::new(subject, grade))
}
