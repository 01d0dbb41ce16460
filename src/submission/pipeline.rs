use chrono::Utc;

use crate::email::templates;
use crate::error::IntakeError;
use crate::models::{Submission, SubmissionFields};
use crate::sheet;
use crate::state::SharedState;

/// Record a submission and notify the configured recipient.
///
/// Nothing is sent if the row could not be written.
pub async fn run(state: &SharedState, fields: SubmissionFields) -> Result<Submission, IntakeError> {
    let submission = Submission::received(fields, Utc::now());
    tracing::info!(
        kind = %submission.kind,
        name = %submission.name,
        email = %submission.email,
        "Form submission received"
    );

    sheet::record(state.sheet.as_ref(), &submission).await?;

    let notification =
        templates::submission_notification(&submission, &state.config.notification_email);
    state
        .notifier
        .send(&notification)
        .await
        .map_err(IntakeError::Notification)?;

    Ok(submission)
}
