pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::is_placeholder_sheet_id;
use crate::error::IntakeError;
use crate::models::Submission;

pub use memory::MemorySheet;
pub use postgres::PgSheet;

/// Column titles of the header row, in sheet order.
pub const HEADERS: [&str; 6] = ["Timestamp", "Type", "Name", "Email", "Message", "Project"];

pub const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStyle {
    pub bold: bool,
    pub background: String,
    pub font_color: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            bold: true,
            background: "#00704A".to_string(),
            font_color: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub cells: Vec<String>,
    pub style: HeaderStyle,
}

impl Default for HeaderRow {
    fn default() -> Self {
        Self {
            cells: HEADERS.iter().map(|h| h.to_string()).collect(),
            style: HeaderStyle::default(),
        }
    }
}

/// An append-only table whose first row, once written, is the header.
#[async_trait]
pub trait SheetStore: Send + Sync {
    fn id(&self) -> &str;

    /// Index of the last occupied row, counting the header. Zero for an
    /// untouched sheet.
    async fn last_row(&self) -> Result<u64, IntakeError>;

    /// Write the header row unless one exists. Returns true if it was
    /// written by this call.
    async fn ensure_header(&self) -> Result<bool, IntakeError>;

    async fn header(&self) -> Result<Option<HeaderRow>, IntakeError>;

    async fn append(&self, submission: &Submission) -> Result<(), IntakeError>;

    /// Up to `limit` data rows, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<Submission>, IntakeError>;
}

/// Append one submission, initializing the header row on first use.
pub async fn record(sheet: &dyn SheetStore, submission: &Submission) -> Result<(), IntakeError> {
    let id = sheet.id().trim();
    if is_placeholder_sheet_id(id) {
        return Err(IntakeError::Persistence(
            "Please update the sheet id with your actual sheet id".to_string(),
        ));
    }

    if sheet.ensure_header().await? {
        tracing::info!(sheet = %id, "Headers created");
    }

    sheet.append(submission).await?;

    tracing::info!(sheet = %id, row = ?submission.cells(), "Data added to sheet");
    Ok(())
}

/// Admin listing. Store failures are logged and read as an empty sheet.
pub async fn list_recent(sheet: &dyn SheetStore, limit: usize) -> Vec<Submission> {
    match sheet.recent(limit).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(sheet = %sheet.id(), "Error getting form submissions: {e}");
            Vec::new()
        }
    }
}
