use async_trait::async_trait;
use sqlx::PgPool;

use super::{HeaderRow, SheetStore};
use crate::db;
use crate::error::IntakeError;
use crate::models::Submission;

/// Sheet backed by the `sheets` / `sheet_rows` tables. Concurrent appends
/// are serialized by the database.
pub struct PgSheet {
    pool: PgPool,
    id: String,
}

impl PgSheet {
    pub fn new(pool: PgPool, id: impl Into<String>) -> Self {
        Self {
            pool,
            id: id.into(),
        }
    }
}

#[async_trait]
impl SheetStore for PgSheet {
    fn id(&self) -> &str {
        &self.id
    }

    async fn last_row(&self) -> Result<u64, IntakeError> {
        let count = db::sheets::count_rows(&self.pool, &self.id).await?;
        Ok(count.max(0) as u64)
    }

    async fn ensure_header(&self) -> Result<bool, IntakeError> {
        Ok(db::sheets::create_header(&self.pool, &self.id, &HeaderRow::default()).await?)
    }

    async fn header(&self) -> Result<Option<HeaderRow>, IntakeError> {
        Ok(db::sheets::find_header(&self.pool, &self.id).await?)
    }

    async fn append(&self, submission: &Submission) -> Result<(), IntakeError> {
        db::sheets::insert_row(&self.pool, &self.id, submission).await?;
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Submission>, IntakeError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Ok(db::sheets::list_recent(&self.pool, &self.id, limit).await?)
    }
}
