//! Map content API error bodies onto form field errors

use serde::Deserialize;

use super::fields::{FieldErrors, PostField};

/// Shown on every field when the API error can't be attributed to fields
pub const CREATE_FAILED_MESSAGE: &str = "Ha habido un error al crear el post";

/// `{ "error": { ... } }`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorPayload,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    #[serde(default)]
    details: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct ValidationDetail {
    path: DetailPath,
    message: String,
}

/// A detail path is either `"title"` or a segment list like `["title"]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailPath {
    Name(String),
    Segments(Vec<serde_json::Value>),
}

impl DetailPath {
    fn field(&self) -> Option<PostField> {
        match self {
            DetailPath::Name(name) => PostField::from_any_name(name),
            DetailPath::Segments(segments) => segments
                .first()
                .and_then(|s| s.as_str())
                .and_then(PostField::from_any_name),
        }
    }
}

/// Build field errors from an upstream error body.
///
/// A body carrying `error.details` is a validation failure: each entry whose
/// path names a form field sets that field's message, and every other entry
/// (unknown path, malformed entry) is skipped. Any other body gets the
/// uniform fallback.
pub fn map_api_errors(body: &str) -> FieldErrors {
    let details = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            error: ApiErrorPayload {
                details: Some(details),
            },
        }) => details,
        _ => return FieldErrors::uniform(CREATE_FAILED_MESSAGE),
    };

    let mut errors = FieldErrors::default();
    for entry in details {
        let detail = match serde_json::from_value::<ValidationDetail>(entry) {
            Ok(detail) => detail,
            Err(e) => {
                tracing::debug!("Skipping malformed validation detail: {}", e);
                continue;
            }
        };

        match detail.path.field() {
            Some(field) => errors.set(field, detail.message),
            None => tracing::debug!("Ignoring validation detail for {:?}", detail.path),
        }
    }

    errors
}
