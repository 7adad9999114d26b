use crate::error::PipelineError;
use crate::optimize::{optimize_survey, Platform, PlatformDocument};
use crate::survey::parse::parse_survey_response;

/// Validates raw model output and converts it for the requested platform in
/// one call. Pure sequencing: either stage's failure is surfaced unchanged,
/// distinguishable via [`PipelineError::code`].
pub fn generate_and_optimize(
    raw_model_text: &str,
    platform: Platform,
) -> Result<PlatformDocument, PipelineError> {
    let survey = parse_survey_response(raw_model_text)?;
    Ok(optimize_survey(&survey, platform)?)
}

#[cfg(test)]
mod tests {
    use super::generate_and_optimize;
    use crate::optimize::{Platform, PlatformDocument};

    const RAW: &str = "```json\n{\"title\":\"T\",\"description\":\"D\",\"settings\":{\"collectEmail\":true},\"questions\":[{\"question\":\"Pick one\",\"type\":\"multiple_choice\",\"required\":true,\"options\":[\"A\",\"B\"]}]}\n```";

    #[test]
    fn runs_both_stages_end_to_end() {
        let document = generate_and_optimize(RAW, Platform::GoogleForms).expect("pipeline");
        let PlatformDocument::GoogleForms(form) = document;
        assert_eq!(form.info.title, "T");
        assert!(form.settings.collect_email);
        assert_eq!(form.items.len(), 1);
    }

    #[test]
    fn validation_failures_keep_their_code() {
        let err = generate_and_optimize("not json at all", Platform::GoogleForms)
            .expect_err("should fail");
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[test]
    fn conversion_failures_keep_their_code() {
        let err = generate_and_optimize(RAW, Platform::Qualtrics).expect_err("should fail");
        assert_eq!(err.code(), "NOT_IMPLEMENTED");
    }
}
