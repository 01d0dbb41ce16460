mod common;

use chrono::{Duration, Utc};

use form_intake::config::{LEGACY_PLACEHOLDER_SHEET_ID, PLACEHOLDER_SHEET_ID};
use form_intake::models::{Submission, SubmissionFields};
use form_intake::setup::{self_test, SELF_TEST_OK};
use form_intake::sheet::{self, MemorySheet, SheetStore};

use common::RecordingNotifier;

fn submission(name: &str, minutes_ago: i64) -> Submission {
    Submission::received(
        SubmissionFields::new(name, "x@x.com", "m"),
        Utc::now() - Duration::minutes(minutes_ago),
    )
}

#[tokio::test]
async fn empty_sheet_has_no_rows() {
    let sheet = MemorySheet::new("s");
    assert_eq!(sheet.last_row().await.unwrap(), 0);
    assert!(sheet.header().await.unwrap().is_none());
    assert!(sheet::list_recent(&sheet, 10).await.is_empty());
}

#[tokio::test]
async fn header_is_created_on_first_record_only() {
    let sheet = MemorySheet::new("s");

    for n in 0..3 {
        sheet::record(&sheet, &submission(&format!("r{n}"), 0))
            .await
            .unwrap();
    }

    assert_eq!(sheet.last_row().await.unwrap(), 4);
    assert!(!sheet.ensure_header().await.unwrap());
}

#[tokio::test]
async fn header_only_sheet_lists_nothing() {
    let sheet = MemorySheet::new("s");
    assert!(sheet.ensure_header().await.unwrap());

    assert_eq!(sheet.last_row().await.unwrap(), 1);
    assert!(sheet::list_recent(&sheet, 100).await.is_empty());
}

#[tokio::test]
async fn recent_is_bounded_and_newest_first() {
    let sheet = MemorySheet::new("s");
    for (name, age) in [("old", 30), ("mid", 20), ("new", 10)] {
        sheet::record(&sheet, &submission(name, age)).await.unwrap();
    }

    let rows = sheet::list_recent(&sheet, 2).await;
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["new", "mid"]);

    assert_eq!(sheet::list_recent(&sheet, 0).await.len(), 0);
    assert_eq!(sheet::list_recent(&sheet, 50).await.len(), 3);
}

#[tokio::test]
async fn record_refuses_placeholder_and_blank_ids() {
    for id in [PLACEHOLDER_SHEET_ID, LEGACY_PLACEHOLDER_SHEET_ID, "", "   "] {
        let sheet = MemorySheet::new(id);
        let err = sheet::record(&sheet, &submission("x", 0)).await.unwrap_err();
        assert!(err.to_string().contains("Please update the sheet id"));
        assert_eq!(sheet.last_row().await.unwrap(), 0);
    }
}

#[tokio::test]
async fn self_test_writes_row_and_sends_plain_email() {
    let config = common::test_config();
    let sheet = MemorySheet::new(config.sheet_id.clone());
    let notifier = RecordingNotifier::default();

    let report = self_test(&config, &sheet, &notifier).await;
    assert_eq!(report, SELF_TEST_OK);

    let rows = sheet.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Test User");
    assert_eq!(rows[0].kind, "contact");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Contact Form Test");
    assert_eq!(sent[0].to, common::TEST_RECIPIENT);
    assert!(!sent[0].html);
}

#[tokio::test]
async fn self_test_reports_failure() {
    let config = common::test_config();
    let sheet = MemorySheet::new(config.sheet_id.clone());
    let notifier = RecordingNotifier::failing("relay refused");

    let report = self_test(&config, &sheet, &notifier).await;
    assert_eq!(report, "Setup test failed: relay refused");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn postgres_sheet_matches_memory_semantics() {
    let _ = dotenvy::dotenv();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let id = format!("test-{}", Utc::now().timestamp_nanos_opt().unwrap_or_default());
    let sheet = sheet::PgSheet::new(pool.clone(), id.clone());

    assert_eq!(sheet.last_row().await.unwrap(), 0);
    for (name, age) in [("a", 3), ("b", 2), ("c", 1)] {
        sheet::record(&sheet, &submission(name, age)).await.unwrap();
    }
    assert_eq!(sheet.last_row().await.unwrap(), 4);
    assert!(!sheet.ensure_header().await.unwrap());
    assert_eq!(
        sheet.header().await.unwrap().unwrap().cells,
        sheet::HEADERS
    );

    let names: Vec<String> = sheet::list_recent(&sheet, 2)
        .await
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["c", "b"]);

    let _ = sqlx::query("DELETE FROM sheet_rows WHERE sheet_id = $1")
        .bind(&id)
        .execute(&pool)
        .await;
    let _ = sqlx::query("DELETE FROM sheets WHERE id = $1")
        .bind(&id)
        .execute(&pool)
        .await;
}
