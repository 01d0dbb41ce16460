use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CONTACT_KIND: &str = "contact";
pub const ENQUIRY_KIND: &str = "enquiry";

/// Free-text fields pulled out of an inbound request. Empty strings stand
/// for "not supplied"; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFields {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub project: String,
}

impl SubmissionFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }
}

/// One row of the submissions sheet.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    #[sqlx(rename = "submitted_at")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub project: String,
}

impl Submission {
    /// Stamp extracted fields with the receipt time. A missing type becomes
    /// `contact`; any other value is kept verbatim.
    pub fn received(fields: SubmissionFields, timestamp: DateTime<Utc>) -> Self {
        let kind = if fields.kind.is_empty() {
            CONTACT_KIND.to_string()
        } else {
            fields.kind
        };

        Self {
            timestamp,
            kind,
            name: fields.name,
            email: fields.email,
            message: fields.message,
            project: fields.project,
        }
    }

    pub fn is_enquiry(&self) -> bool {
        self.kind == ENQUIRY_KIND
    }

    /// Cells in sheet column order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.timestamp.to_rfc3339(),
            self.kind.clone(),
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
            self.project.clone(),
        ]
    }
}
