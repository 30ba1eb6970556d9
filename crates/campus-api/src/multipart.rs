//! Multipart form encoding for media uploads.

use crate::{ApiError, ApiResult};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// Form field name the backend expects media files under.
const MEDIA_FIELD: &str = "media";

/// A file attached to a create or update submission.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Flatten a payload into text form fields.
///
/// Mirrors the wire shape of a browser `FormData` submission: each top-level
/// field becomes one text part; nulls are skipped; non-string values are
/// rendered as their JSON text.
pub fn form_fields<B: Serialize>(payload: &B) -> ApiResult<Vec<(String, String)>> {
    let value = serde_json::to_value(payload)?;
    let map = match value {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(ApiError::Validation(
                "Submission payload must be a set of named fields.".to_string(),
            ))
        }
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => fields.push((key, s)),
            other => fields.push((key, other.to_string())),
        }
    }
    Ok(fields)
}

/// Build a multipart form from text fields and media attachments.
pub(crate) fn build_form(
    fields: Vec<(String, String)>,
    attachments: Vec<Attachment>,
) -> ApiResult<Form> {
    let mut form = Form::new();
    for (key, value) in fields {
        form = form.text(key, value);
    }
    for attachment in attachments {
        let part = Part::bytes(attachment.bytes)
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.mime_type)
            .map_err(|_| {
                ApiError::Validation(format!(
                    "Invalid media type for {}: {}",
                    attachment.file_name, attachment.mime_type
                ))
            })?;
        form = form.part(MEDIA_FIELD, part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SamplePayload {
        title: String,
        price: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    }

    #[test]
    fn fields_are_flattened_to_strings() {
        let payload = SamplePayload {
            title: "Rust 101".to_string(),
            price: 49.5,
            category: None,
        };
        let mut fields = form_fields(&payload).unwrap();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("price".to_string(), "49.5".to_string()),
                ("title".to_string(), "Rust 101".to_string()),
            ]
        );
    }

    #[test]
    fn non_object_payload_is_a_validation_error() {
        let err = form_fields(&vec!["not", "an", "object"]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn invalid_mime_type_is_a_validation_error() {
        let attachment = Attachment::new("intro.mp4", vec![1, 2, 3], "not a mime");
        let err = build_form(Vec::new(), vec![attachment]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn valid_attachments_build_a_form() {
        let attachment = Attachment::new("intro.mp4", vec![1, 2, 3], "video/mp4");
        assert!(build_form(
            vec![("title".to_string(), "Intro".to_string())],
            vec![attachment]
        )
        .is_ok());
    }
}
