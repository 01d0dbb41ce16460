use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{HeaderRow, SheetStore};
use crate::error::IntakeError;
use crate::models::Submission;

#[derive(Default)]
struct Rows {
    header: Option<HeaderRow>,
    data: Vec<Submission>,
}

/// Process-local sheet. Contents are lost on restart.
pub struct MemorySheet {
    id: String,
    rows: RwLock<Rows>,
}

impl MemorySheet {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rows: RwLock::new(Rows::default()),
        }
    }

    /// Data rows in append order.
    pub async fn rows(&self) -> Vec<Submission> {
        self.rows.read().await.data.clone()
    }
}

#[async_trait]
impl SheetStore for MemorySheet {
    fn id(&self) -> &str {
        &self.id
    }

    async fn last_row(&self) -> Result<u64, IntakeError> {
        let rows = self.rows.read().await;
        let header = u64::from(rows.header.is_some());
        Ok(header + rows.data.len() as u64)
    }

    async fn ensure_header(&self) -> Result<bool, IntakeError> {
        let mut rows = self.rows.write().await;
        // A sheet that already has rows keeps its layout.
        if rows.header.is_some() || !rows.data.is_empty() {
            return Ok(false);
        }
        rows.header = Some(HeaderRow::default());
        Ok(true)
    }

    async fn header(&self) -> Result<Option<HeaderRow>, IntakeError> {
        Ok(self.rows.read().await.header.clone())
    }

    async fn append(&self, submission: &Submission) -> Result<(), IntakeError> {
        self.rows.write().await.data.push(submission.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Submission>, IntakeError> {
        let rows = self.rows.read().await;
        Ok(rows.data.iter().rev().take(limit).cloned().collect())
    }
}
