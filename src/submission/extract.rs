use serde_json::Value;

use super::parser::{self, Params};
use crate::models::SubmissionFields;

pub const PARSE_ERROR_NAME: &str = "Parse Error";
pub const PARSE_ERROR_EMAIL: &str = "unknown@email.com";
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse form data";

pub const TEST_ENTRY_NAME: &str = "Test Entry";
pub const TEST_ENTRY_EMAIL: &str = "test@example.com";
pub const TEST_ENTRY_MESSAGE: &str = "No form data received - this is a test entry";

/// Where the fields of a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Params,
    Json,
    ParseError,
    Empty,
}

/// Pull submission fields out of a request.
///
/// Parameters (query string, urlencoded or multipart body) win. Otherwise a
/// non-empty body is read as JSON. Input that cannot be read is replaced by
/// a sentinel record instead of failing the request.
pub async fn from_request(
    query: Option<&str>,
    content_type: Option<&str>,
    body: bytes::Bytes,
) -> (SubmissionFields, Source) {
    let mut params = parser::parse_query(query);
    let ct = content_type.unwrap_or("");

    if ct.contains("application/x-www-form-urlencoded") {
        params.extend(parser::parse_form_urlencoded(&body));
    } else if ct.contains("multipart/form-data") {
        match parser::parse_multipart(ct, body.clone()).await {
            Ok(parts) => params.extend(parts),
            Err(e) => tracing::warn!("Ignoring unreadable multipart body: {e}"),
        }
    }

    if !params.is_empty() {
        return (from_params(&params), Source::Params);
    }

    if body.is_empty() {
        tracing::info!("No form data found, creating test entry");
        return (test_entry(), Source::Empty);
    }

    match serde_json::from_slice::<Value>(&body) {
        Ok(value) => (from_json(&value), Source::Json),
        Err(e) => {
            tracing::error!("Failed to parse JSON: {e}");
            (parse_error(), Source::ParseError)
        }
    }
}

pub fn from_params(params: &Params) -> SubmissionFields {
    SubmissionFields {
        kind: parser::first(params, "type").to_string(),
        name: parser::first(params, "name").to_string(),
        email: parser::first(params, "email").to_string(),
        message: parser::first(params, "message").to_string(),
        project: parser::first(params, "project").to_string(),
    }
}

/// Fields of a JSON object. Falsy scalars (`false`, `0`, `""`, `null`) read
/// as empty; other scalars are stringified. A body that is not an object
/// yields empty fields.
pub fn from_json(value: &Value) -> SubmissionFields {
    SubmissionFields {
        kind: json_string_field(value, "type"),
        name: json_string_field(value, "name"),
        email: json_string_field(value, "email"),
        message: json_string_field(value, "message"),
        project: json_string_field(value, "project"),
    }
}

pub fn parse_error() -> SubmissionFields {
    SubmissionFields::new(PARSE_ERROR_NAME, PARSE_ERROR_EMAIL, PARSE_ERROR_MESSAGE)
}

pub fn test_entry() -> SubmissionFields {
    SubmissionFields::new(TEST_ENTRY_NAME, TEST_ENTRY_EMAIL, TEST_ENTRY_MESSAGE)
}

fn json_string_field(value: &Value, field: &str) -> String {
    match value.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | Some(Value::Bool(false)) | None => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => other.to_string(),
    }
}
