use crate::error::ConvertError;
use crate::survey::types::{QuestionType, Survey, SurveyQuestion};

use super::types::{
    ChoiceKind, ChoiceOption, ChoiceQuestion, DateQuestion, FormInfo, FormQuestion, FormSettings,
    GoogleFormsForm, GoogleFormsItem, ItemBody, QuestionItem, QuestionPayload, ScaleQuestion,
    SectionHeader, TextQuestion, TimeQuestion,
};

// The Forms API rejects forms without a title.
pub(crate) const DEFAULT_TITLE: &str = "Untitled Survey";

const DEFAULT_SCALE_LOW: i64 = 1;
const DEFAULT_SCALE_HIGH: i64 = 5;
const DEFAULT_LOW_LABEL: &str = "Lowest";
const DEFAULT_HIGH_LABEL: &str = "Highest";

/// Pure transformation of a validated [`Survey`] into the Google Forms
/// document shape. Items come out 1:1 with the source questions, in order.
pub fn convert_to_google_forms(survey: &Survey) -> Result<GoogleFormsForm, ConvertError> {
    let items = survey
        .questions
        .iter()
        .map(convert_item)
        .collect::<Result<Vec<GoogleFormsItem>, ConvertError>>()?;

    let title = if survey.title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        survey.title.clone()
    };

    Ok(GoogleFormsForm {
        info: FormInfo {
            title: title.clone(),
            document_title: title,
            description: survey.description.clone(),
        },
        settings: FormSettings {
            collect_email: survey.settings.collect_email,
        },
        items,
    })
}

fn convert_item(question: &SurveyQuestion) -> Result<GoogleFormsItem, ConvertError> {
    Ok(GoogleFormsItem {
        title: question.question.clone(),
        description: question.description.clone(),
        body: item_body(question)?,
    })
}

fn item_body(question: &SurveyQuestion) -> Result<ItemBody, ConvertError> {
    let payload = match question.question_type {
        QuestionType::Section => {
            return Ok(ItemBody::SectionHeader(SectionHeader {
                title: question.question.clone(),
                description: question.description.clone(),
            }));
        }
        QuestionType::Paragraph => QuestionPayload::TextQuestion(TextQuestion { paragraph: true }),
        QuestionType::MultipleChoice => choice_payload(question, ChoiceKind::Radio)?,
        QuestionType::Checkbox => choice_payload(question, ChoiceKind::Checkbox)?,
        QuestionType::Dropdown => choice_payload(question, ChoiceKind::DropDown)?,
        QuestionType::Rating => QuestionPayload::ScaleQuestion(scale_payload(question)),
        QuestionType::Date => QuestionPayload::DateQuestion(DateQuestion {
            include_time: None,
            include_year: Some(true),
        }),
        QuestionType::Time => QuestionPayload::TimeQuestion(TimeQuestion {
            duration: Some(false),
        }),
        // Forms has no dedicated email or number widget; they export as
        // short-answer text, the same fallback any unmapped type would get.
        QuestionType::Text | QuestionType::Email | QuestionType::Number => {
            QuestionPayload::TextQuestion(TextQuestion { paragraph: false })
        }
    };

    Ok(ItemBody::QuestionItem(QuestionItem {
        question: FormQuestion {
            required: question.required,
            payload,
        },
    }))
}

fn choice_payload(
    question: &SurveyQuestion,
    kind: ChoiceKind,
) -> Result<QuestionPayload, ConvertError> {
    let options = question
        .options
        .as_ref()
        .filter(|opts| !opts.is_empty())
        .ok_or_else(|| ConvertError::InvalidSurvey {
            message: format!("choice question \"{}\" has no options", question.question),
        })?;

    Ok(QuestionPayload::ChoiceQuestion(ChoiceQuestion {
        kind,
        options: options
            .iter()
            .map(|value| ChoiceOption {
                value: value.clone(),
            })
            .collect(),
    }))
}

fn scale_payload(question: &SurveyQuestion) -> ScaleQuestion {
    let settings = question.settings.as_ref();
    let labels = settings.and_then(|s| s.rating_labels.as_ref());
    ScaleQuestion {
        low: settings
            .and_then(|s| s.min_rating)
            .unwrap_or(DEFAULT_SCALE_LOW),
        high: settings
            .and_then(|s| s.max_rating)
            .unwrap_or(DEFAULT_SCALE_HIGH),
        low_label: Some(
            labels
                .map(|l| l.min.clone())
                .unwrap_or_else(|| DEFAULT_LOW_LABEL.to_string()),
        ),
        high_label: Some(
            labels
                .map(|l| l.max.clone())
                .unwrap_or_else(|| DEFAULT_HIGH_LABEL.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::convert_to_google_forms;
    use crate::survey::parse::parse_survey_response_at;
    use crate::survey::types::{
        QuestionSettings, QuestionType, RatingLabels, Survey, SurveyQuestion, SurveySettings,
    };

    fn question(text: &str, question_type: QuestionType) -> SurveyQuestion {
        SurveyQuestion {
            id: "q0_0".to_string(),
            question: text.to_string(),
            question_type,
            required: false,
            description: None,
            options: None,
            settings: None,
        }
    }

    fn survey(questions: Vec<SurveyQuestion>) -> Survey {
        Survey {
            title: "T".to_string(),
            description: "D".to_string(),
            settings: SurveySettings::default(),
            questions,
        }
    }

    #[test]
    fn multiple_choice_maps_to_radio_with_options_in_order() {
        let raw = "{\"title\":\"T\",\"description\":\"D\",\"settings\":{},\"questions\":[{\"question\":\"Pick one\",\"type\":\"multiple_choice\",\"required\":true,\"options\":[\"A\",\"B\"]}]}";
        let parsed = parse_survey_response_at(raw, 7).expect("parse survey");
        let form = convert_to_google_forms(&parsed).expect("convert");
        assert_eq!(form.items.len(), 1);

        let item = serde_json::to_value(&form.items[0]).expect("serialize item");
        assert_eq!(
            item,
            serde_json::json!({
                "title": "Pick one",
                "questionItem": {
                    "question": {
                        "required": true,
                        "choiceQuestion": {
                            "type": "RADIO",
                            "options": [{"value": "A"}, {"value": "B"}]
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn rating_settings_override_bounds_and_labels_default() {
        let mut q = question("Rate us", QuestionType::Rating);
        q.settings = Some(QuestionSettings {
            min_rating: Some(0),
            max_rating: Some(10),
            ..QuestionSettings::default()
        });
        let form = convert_to_google_forms(&survey(vec![q])).expect("convert");

        let item = serde_json::to_value(&form.items[0]).expect("serialize item");
        assert_eq!(
            item.pointer("/questionItem/question/scaleQuestion"),
            Some(&serde_json::json!({
                "low": 0,
                "high": 10,
                "lowLabel": "Lowest",
                "highLabel": "Highest"
            }))
        );
    }

    #[test]
    fn rating_labels_override_defaults() {
        let mut q = question("Satisfied?", QuestionType::Rating);
        q.settings = Some(QuestionSettings {
            rating_labels: Some(RatingLabels {
                min: "Very Dissatisfied".to_string(),
                max: "Very Satisfied".to_string(),
            }),
            ..QuestionSettings::default()
        });
        let form = convert_to_google_forms(&survey(vec![q])).expect("convert");

        let item = serde_json::to_value(&form.items[0]).expect("serialize item");
        assert_eq!(
            item.pointer("/questionItem/question/scaleQuestion/lowLabel"),
            Some(&serde_json::json!("Very Dissatisfied"))
        );
        assert_eq!(
            item.pointer("/questionItem/question/scaleQuestion/low"),
            Some(&serde_json::json!(1))
        );
    }

    #[test]
    fn section_becomes_header_item_without_question_payload() {
        let mut q = question("About you", QuestionType::Section);
        q.description = Some("Background".to_string());
        let form = convert_to_google_forms(&survey(vec![q])).expect("convert");

        let item = serde_json::to_value(&form.items[0]).expect("serialize item");
        assert_eq!(
            item,
            serde_json::json!({
                "title": "About you",
                "description": "Background",
                "sectionHeader": {
                    "title": "About you",
                    "description": "Background"
                }
            })
        );
    }

    #[test]
    fn email_and_number_fall_back_to_short_answer_text() {
        let form = convert_to_google_forms(&survey(vec![
            question("Your email", QuestionType::Email),
            question("Your age", QuestionType::Number),
        ]))
        .expect("convert");

        for item in &form.items {
            let value = serde_json::to_value(item).expect("serialize item");
            assert_eq!(
                value.pointer("/questionItem/question/textQuestion/paragraph"),
                Some(&serde_json::json!(false))
            );
        }
    }

    #[test]
    fn items_preserve_question_order_one_to_one() {
        let mut dropdown = question("Country", QuestionType::Dropdown);
        dropdown.options = Some(vec!["A".to_string(), "B".to_string()]);
        let source = survey(vec![
            question("Intro", QuestionType::Section),
            question("Name", QuestionType::Text),
            dropdown,
            question("Feedback", QuestionType::Paragraph),
        ]);
        let form = convert_to_google_forms(&source).expect("convert");

        assert_eq!(form.items.len(), source.questions.len());
        for (item, q) in form.items.iter().zip(source.questions.iter()) {
            assert_eq!(item.title, q.question);
        }
    }

    #[test]
    fn empty_title_defaults_to_untitled_survey() {
        let mut source = survey(vec![]);
        source.title = "   ".to_string();
        let form = convert_to_google_forms(&source).expect("convert");
        assert_eq!(form.info.title, "Untitled Survey");
        assert_eq!(form.info.document_title, "Untitled Survey");
    }

    #[test]
    fn choice_question_without_options_is_rejected() {
        let source = survey(vec![question("Pick", QuestionType::MultipleChoice)]);
        let err = convert_to_google_forms(&source).expect_err("should fail");
        assert_eq!(err.code(), "INVALID_SURVEY");
        assert!(err.to_string().contains("Pick"));
    }

    #[test]
    fn conversion_is_pure() {
        let mut q = question("Pick one", QuestionType::MultipleChoice);
        q.options = Some(vec!["A".to_string(), "B".to_string()]);
        let source = survey(vec![q, question("When", QuestionType::Date)]);

        let first = convert_to_google_forms(&source).expect("convert");
        let second = convert_to_google_forms(&source).expect("convert");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serialize"),
            serde_json::to_string(&second).expect("serialize")
        );
    }
}
