/// Instruction block sent ahead of the user content. The JSON structure and
/// the per-type rules here are what make the validator's repair rules
/// reachable: the model is told to answer with bare JSON in exactly the
/// shape `survey::parse` expects.
const GUIDELINES: &str = r#"Create a focused, non-repetitive survey based on the following content. Follow these strict guidelines:

1. Return ONLY a valid JSON object, with no markdown formatting, no code blocks, and no additional text
2. Do not include ```json or any other formatting markers
3. IMPORTANT: Never create duplicate questions - do not repeat the same question with different types
4. Choose the most appropriate question type for each question - do not create both dropdown and multiple choice versions
5. Use these question types appropriately and follow these rules:
   - multiple_choice: Use for single selection from 2-5 options, best for opinions/ratings
   - checkbox: Use for "select all that apply" questions with multiple possible answers
   - dropdown: Use ONLY for single select, long lists (>5 options) like countries or categories
   - text: Use for short, specific answers (names, titles, brief responses)
   - paragraph: Use for detailed feedback, suggestions, or explanations
   - rating: Use for satisfaction scores or numeric ratings (1-5 by default)
   - date: Use only for actual date inputs (birthdays, appointments)
   - time: Use only for actual time inputs (preferred time, scheduling)
   - email: Use only when collecting email addresses
   - number: Use for numeric inputs (age, quantity, etc.)
   - section: Use ONLY for creating section headers to organize the survey. Not a question type - just for grouping related questions with a title and optional description. Use sparingly to maintain survey flow. Use only when necessary in long surveys, or requested by the user.

6. Keep surveys focused and efficient:
   - Avoid redundant or overlapping questions
   - Group related questions together logically
   - Progress from general to specific questions
   - Include a mix of question types for engagement

Use this exact JSON structure:
{
    "title": "Clear, relevant title",
    "description": "Brief survey description",
    "settings": {
        "collectEmail": boolean,
        "confirmationMessage": "Message shown after submission",
        "allowMultipleResponses": boolean
    },
    "questions": [
        {
            "question": "Clear question text",
            "type": "one of the question types above",
            "required": boolean,
            "description": "Optional helper text",
            "options": ["option1", "option2"],
            "settings": {
                "allowOther": boolean,
                "minRating": number,
                "maxRating": number,
                "ratingLabels": {
                    "min": "Label for lowest rating",
                    "max": "Label for highest rating"
                },
                "validation": {
                    "min": number,
                    "max": number,
                    "pattern": "regex pattern"
                }
            }
        },
        {
            "question": "Section Title",
            "type": "section",
            "required": false,
            "description": "Optional section description that provides context for the following questions"
        }
    ]
}

Critical Rules:
1. DO NOT create duplicate questions with different types (e.g., no dropdown version of a multiple-choice question)
2. Choose the most appropriate single type for each question
3. Use dropdown ONLY for long lists of options (>5 items)
4. Ensure each question adds unique value to the survey
5. Keep the survey focused and efficient"#;

/// Builds the full generation prompt for one piece of user content.
pub fn generation_prompt(content: &str) -> String {
    format!("{GUIDELINES}\n\nContent to create survey for: {content}")
}

#[cfg(test)]
mod tests {
    use super::generation_prompt;

    #[test]
    fn prompt_carries_the_user_content() {
        let prompt = generation_prompt("Coffee shop customer satisfaction");
        assert!(prompt.ends_with("Content to create survey for: Coffee shop customer satisfaction"));
    }

    #[test]
    fn prompt_pins_the_output_contract() {
        let prompt = generation_prompt("anything");
        assert!(prompt.contains("Return ONLY a valid JSON object"));
        assert!(prompt.contains("Use this exact JSON structure:"));
        assert!(prompt.contains("\"type\": \"section\""));
    }
}
