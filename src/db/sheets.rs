use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::Submission;
use crate::sheet::{HeaderRow, HeaderStyle};

#[derive(sqlx::FromRow)]
struct HeaderRecord {
    headers: Json<Vec<String>>,
    header_style: Json<HeaderStyle>,
}

/// Insert the header row for `sheet_id` if it is missing. Returns true when
/// this call created it.
pub async fn create_header(
    pool: &PgPool,
    sheet_id: &str,
    header: &HeaderRow,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO sheets (id, headers, header_style) VALUES ($1, $2, $3)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(sheet_id)
    .bind(Json(&header.cells))
    .bind(Json(&header.style))
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn find_header(pool: &PgPool, sheet_id: &str) -> Result<Option<HeaderRow>, sqlx::Error> {
    let record = sqlx::query_as::<_, HeaderRecord>(
        "SELECT headers, header_style FROM sheets WHERE id = $1",
    )
    .bind(sheet_id)
    .fetch_optional(pool)
    .await?;

    Ok(record.map(|r| HeaderRow {
        cells: r.headers.0,
        style: r.header_style.0,
    }))
}

/// Header row (if any) plus data rows.
pub async fn count_rows(pool: &PgPool, sheet_id: &str) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM sheets WHERE id = $1)
              + (SELECT COUNT(*) FROM sheet_rows WHERE sheet_id = $1)",
    )
    .bind(sheet_id)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

pub async fn insert_row(
    pool: &PgPool,
    sheet_id: &str,
    submission: &Submission,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO sheet_rows (sheet_id, submitted_at, kind, name, email, message, project)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(sheet_id)
    .bind(submission.timestamp)
    .bind(&submission.kind)
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.message)
    .bind(&submission.project)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list_recent(
    pool: &PgPool,
    sheet_id: &str,
    limit: i64,
) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "SELECT submitted_at, kind, name, email, message, project FROM sheet_rows
         WHERE sheet_id = $1
         ORDER BY id DESC LIMIT $2",
    )
    .bind(sheet_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
