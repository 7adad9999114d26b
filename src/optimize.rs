use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::forms::convert::convert_to_google_forms;
use crate::forms::types::GoogleFormsForm;
use crate::survey::types::Survey;

/// Export destinations a survey can be optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    GoogleForms,
    Qualtrics,
    #[serde(rename = "surveymonkey")]
    SurveyMonkey,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::GoogleForms => "google_forms",
            Platform::Qualtrics => "qualtrics",
            Platform::SurveyMonkey => "surveymonkey",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform-specific output of the converter, one variant per implemented
/// destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlatformDocument {
    GoogleForms(GoogleFormsForm),
}

/// Converts a validated survey into the requested platform's document shape.
/// Unimplemented platforms fail with `NOT_IMPLEMENTED`; callers must not
/// retry those.
pub fn optimize_survey(
    survey: &Survey,
    platform: Platform,
) -> Result<PlatformDocument, ConvertError> {
    match platform {
        Platform::GoogleForms => Ok(PlatformDocument::GoogleForms(convert_to_google_forms(
            survey,
        )?)),
        Platform::Qualtrics | Platform::SurveyMonkey => {
            Err(ConvertError::NotImplemented { platform })
        }
    }
}
