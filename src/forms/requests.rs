use serde::{Deserialize, Serialize};

use super::convert::DEFAULT_TITLE;
use super::types::{GoogleFormsForm, GoogleFormsItem};

/// Body for the Forms `forms.create` call. The API only accepts a title at
/// creation time; description and items follow via `batchUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormRequest {
    pub info: CreateFormInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub requests: Vec<FormRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormRequest {
    CreateItem(CreateItemRequest),
    UpdateFormInfo(UpdateFormInfoRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub item: GoogleFormsItem,
    pub location: ItemLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLocation {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormInfoRequest {
    pub info: DescriptionInfo,
    pub update_mask: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionInfo {
    pub description: String,
}

pub fn create_form_request(form: &GoogleFormsForm) -> CreateFormRequest {
    let title = form.info.title.trim();
    CreateFormRequest {
        info: CreateFormInfo {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
        },
    }
}

/// One `updateFormInfo` request carrying the description, or `None` when the
/// trimmed description is empty and the call should be skipped.
pub fn update_description_request(form: &GoogleFormsForm) -> Option<BatchUpdateRequest> {
    let description = form.info.description.trim();
    if description.is_empty() {
        return None;
    }
    Some(BatchUpdateRequest {
        requests: vec![FormRequest::UpdateFormInfo(UpdateFormInfoRequest {
            info: DescriptionInfo {
                description: description.to_string(),
            },
            update_mask: "description".to_string(),
        })],
    })
}

/// One `createItem` request per item, each tagged with its position.
pub fn create_item_requests(form: &GoogleFormsForm) -> Option<BatchUpdateRequest> {
    if form.items.is_empty() {
        return None;
    }
    Some(BatchUpdateRequest {
        requests: form
            .items
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, item)| {
                FormRequest::CreateItem(CreateItemRequest {
                    item,
                    location: ItemLocation { index },
                })
            })
            .collect(),
    })
}
