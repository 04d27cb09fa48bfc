use super::domain::StudentAttributes;
use super::grades::GradeProfile;
use super::EligibilityMatch;

/// Plain-language summary of a result, suitable as input to a text-generation service.
pub fn advisory_brief(
    profile: &GradeProfile,
    attrs: &StudentAttributes,
    matches: &[EligibilityMatch<'_>],
) -> String {
    let origin = attrs
        .state
        .map(|state| state.label())
        .unwrap_or("an unspecified state");
    let religion = if attrs.is_muslim { "Muslim" } else { "non-Muslim" };
    let status = if attrs.is_bumiputera {
        "Bumiputera"
    } else {
        "non-Bumiputera"
    };

    let mut brief = format!(
        "Student from {origin} ({religion}, {status}) with a co-curricular score of {:.2}. ",
        attrs.cocurricular_score
    );
    brief.push_str(&format!(
        "{} subjects recorded: {} A+, {} A+/A, {} A+/A/A-. ",
        profile.subject_count(),
        profile.count_a_plus(),
        profile.count_a_strict(),
        profile.count_a_loose()
    ));

    if matches.is_empty() {
        brief.push_str("Eligible scholarships: none.");
    } else {
        let names: Vec<&str> = matches.iter().map(|item| item.rule.name.as_str()).collect();
        brief.push_str(&format!(
            "Eligible scholarships ({}): {}.",
            names.len(),
            names.join("; ")
        ));
    }

    brief
}
