use chrono::Utc;

use crate::config::Config;
use crate::email::{templates, Notifier};
use crate::error::IntakeError;
use crate::models::{Submission, SubmissionFields};
use crate::sheet::{self, SheetStore};

pub const SELF_TEST_OK: &str = "Setup test completed successfully";

/// Exercise the configured sheet and mail path end to end: write a test row,
/// then send a plain test email. Returns a one-line report.
pub async fn self_test(config: &Config, store: &dyn SheetStore, notifier: &dyn Notifier) -> String {
    match run(config, store, notifier).await {
        Ok(()) => {
            tracing::info!("Test completed successfully");
            SELF_TEST_OK.to_string()
        }
        Err(e) => {
            tracing::error!("Setup test failed: {e}");
            format!("Setup test failed: {e}")
        }
    }
}

async fn run(
    config: &Config,
    store: &dyn SheetStore,
    notifier: &dyn Notifier,
) -> Result<(), IntakeError> {
    let rows = store.last_row().await?;
    tracing::info!(sheet = %store.id(), rows, "Sheet access successful");

    let fields = SubmissionFields::new("Test User", "test@example.com", "This is a test message");
    sheet::record(store, &Submission::received(fields, Utc::now())).await?;

    notifier
        .send(&templates::setup_test_notification(&config.notification_email))
        .await
        .map_err(IntakeError::Notification)?;

    Ok(())
}
