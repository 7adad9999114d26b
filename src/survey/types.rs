use serde::{Deserialize, Serialize};

/// Question types the generation prompt allows. Anything outside this set is
/// rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Checkbox,
    Text,
    Paragraph,
    Rating,
    Dropdown,
    Date,
    Time,
    Email,
    Number,
    Section,
}

impl QuestionType {
    pub fn parse(value: &str) -> Option<QuestionType> {
        match value {
            "multiple_choice" => Some(QuestionType::MultipleChoice),
            "checkbox" => Some(QuestionType::Checkbox),
            "text" => Some(QuestionType::Text),
            "paragraph" => Some(QuestionType::Paragraph),
            "rating" => Some(QuestionType::Rating),
            "dropdown" => Some(QuestionType::Dropdown),
            "date" => Some(QuestionType::Date),
            "time" => Some(QuestionType::Time),
            "email" => Some(QuestionType::Email),
            "number" => Some(QuestionType::Number),
            "section" => Some(QuestionType::Section),
            _ => None,
        }
    }

    /// Types that must carry their own options.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::Checkbox | QuestionType::Dropdown
        )
    }

    /// Types a dropdown may borrow options from during repair.
    pub fn is_option_donor(self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::Checkbox)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingLabels {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_other: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_labels: Option<RatingLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    /// Assigned at ingestion, `q{timestamp}_{index}`. Never recomputed.
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<QuestionSettings>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySettings {
    #[serde(default)]
    pub collect_email: bool,
    #[serde(default)]
    pub confirmation_message: String,
    #[serde(default)]
    pub allow_multiple_responses: bool,
}

/// The internal, validated representation of a generated questionnaire.
/// Question order is significant: surveys display and export in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub settings: SurveySettings,
    pub questions: Vec<SurveyQuestion>,
}
