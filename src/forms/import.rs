use serde_json::Value;

use crate::error::ImportError;

use super::types::{FormInfo, FormSettings, GoogleFormsForm, GoogleFormsItem};

/// Validates an externally supplied Forms document (e.g. a payload posted to
/// the import endpoint) into a typed [`GoogleFormsForm`].
///
/// Every complaint is collected rather than failing on the first one, so the
/// caller can surface the full list at once.
pub fn parse_import_payload(payload: &Value) -> Result<GoogleFormsForm, ImportError> {
    let mut details: Vec<String> = Vec::new();

    let info = payload.get("info");
    match info.and_then(|v| v.get("title")) {
        None => details.push("title is required".to_string()),
        Some(value) if !value.is_string() => details.push("title must be a string".to_string()),
        Some(value) if value.as_str() == Some("") => details.push("title is required".to_string()),
        _ => {}
    }
    if let Some(description) = info.and_then(|v| v.get("description")) {
        if !description.is_string() && !description.is_null() {
            details.push("description must be a string".to_string());
        }
    }

    let items_value = payload.get("items");
    let mut items: Vec<GoogleFormsItem> = Vec::new();
    match items_value.and_then(Value::as_array) {
        None => details.push("items must be an array".to_string()),
        Some(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                match serde_json::from_value::<GoogleFormsItem>(entry.clone()) {
                    Ok(item) => items.push(item),
                    Err(e) => details.push(format!("items[{index}] is not a valid form item: {e}")),
                }
            }
        }
    }

    if !details.is_empty() {
        return Err(ImportError::InvalidPayload { details });
    }

    let title = payload
        .pointer("/info/title")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let description = payload
        .pointer("/info/description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(GoogleFormsForm {
        info: FormInfo {
            title: title.clone(),
            document_title: title,
            description,
        },
        settings: FormSettings::default(),
        items,
    })
}
