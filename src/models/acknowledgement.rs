use serde::{Deserialize, Serialize};

pub const ACCEPTED_MESSAGE: &str = "Form submitted successfully";

/// Body of every answer to a form POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Error processing form submission: {error}"),
        }
    }
}
