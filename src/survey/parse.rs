use chrono::Utc;
use serde_json::Value;

use crate::error::ValidateError;
use crate::util::text::strip_code_fences;

use super::types::{QuestionSettings, QuestionType, Survey, SurveyQuestion, SurveySettings};

/// Validates raw model output and repairs it into a [`Survey`].
///
/// The input is untrusted: it may be wrapped in code fences and any field may
/// be missing or mistyped. Questions are checked in order; dropdowns without
/// options borrow them from the first preceding multiple-choice or checkbox
/// question that has any.
pub fn parse_survey_response(raw: &str) -> Result<Survey, ValidateError> {
    parse_survey_response_at(raw, Utc::now().timestamp_millis())
}

/// Same as [`parse_survey_response`] with the ID timestamp injected. The
/// timestamp is captured once per call so IDs are stable relative to each
/// other within one run.
pub(crate) fn parse_survey_response_at(raw: &str, stamp: i64) -> Result<Survey, ValidateError> {
    let candidate = strip_code_fences(raw);
    let root: Value = serde_json::from_str(&candidate).map_err(|e| ValidateError::Parse {
        message: e.to_string(),
        raw: raw.to_string(),
    })?;

    let title = non_empty_string(&root, "title").ok_or(ValidateError::InvalidResponse)?;
    let description = non_empty_string(&root, "description").ok_or(ValidateError::InvalidResponse)?;
    let raw_questions = root
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(ValidateError::InvalidResponse)?;

    let settings = root
        .get("settings")
        .map(|v| serde_json::from_value::<SurveySettings>(v.clone()).unwrap_or_default())
        .unwrap_or_default();

    let mut questions: Vec<SurveyQuestion> = Vec::with_capacity(raw_questions.len());
    for (index, entry) in raw_questions.iter().enumerate() {
        let question = parse_question(entry, index, stamp, &questions)?;
        questions.push(question);
    }

    Ok(Survey {
        title,
        description,
        settings,
        questions,
    })
}

fn parse_question(
    entry: &Value,
    index: usize,
    stamp: i64,
    preceding: &[SurveyQuestion],
) -> Result<SurveyQuestion, ValidateError> {
    let question_text = entry.get("question").and_then(Value::as_str).unwrap_or("");
    let type_str = entry.get("type").and_then(Value::as_str).unwrap_or("");
    if question_text.is_empty() || type_str.is_empty() {
        return Err(ValidateError::InvalidQuestion { index });
    }
    let question_type =
        QuestionType::parse(type_str).ok_or(ValidateError::InvalidQuestion { index })?;

    let mut options = entry.get("options").and_then(Value::as_array).map(|arr| {
        arr.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect::<Vec<String>>()
    });

    // Sections partition the list visually and carry no response semantics,
    // so they are exempt from the option-count rules.
    if question_type != QuestionType::Section {
        let count = options.as_ref().map_or(0, Vec::len);
        match question_type {
            QuestionType::Dropdown if count == 0 => {
                options = Some(borrow_donor_options(preceding).ok_or_else(|| {
                    ValidateError::InvalidOptions {
                        index,
                        question: question_text.to_string(),
                    }
                })?);
            }
            _ if question_type.is_choice() && count < 2 => {
                return Err(ValidateError::InvalidOptions {
                    index,
                    question: question_text.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(SurveyQuestion {
        id: format!("q{stamp}_{index}"),
        question: question_text.to_string(),
        question_type,
        required: entry.get("required").and_then(Value::as_bool).unwrap_or(false),
        description: entry
            .get("description")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        options,
        settings: entry
            .get("settings")
            .and_then(|v| serde_json::from_value::<QuestionSettings>(v.clone()).ok()),
    })
}

// Forward scan from the start of the question list; the first
// multiple-choice or checkbox question with any options is the donor.
fn borrow_donor_options(preceding: &[SurveyQuestion]) -> Option<Vec<String>> {
    preceding
        .iter()
        .find(|q| {
            q.question_type.is_option_donor()
                && q.options.as_ref().is_some_and(|opts| !opts.is_empty())
        })
        .and_then(|q| q.options.clone())
}

fn non_empty_string(root: &Value, key: &str) -> Option<String> {
    root.get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
