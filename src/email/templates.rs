use super::Notification;
use crate::models::Submission;

pub const SETUP_TEST_SUBJECT: &str = "Contact Form Test";

/// Subject line for a new submission. Enquiries name the project.
pub fn subject(submission: &Submission) -> String {
    let name = or_default(&submission.name, "Unknown");
    if submission.is_enquiry() {
        let project = or_default(&submission.project, "N/A");
        format!("New Project Enquiry from {name} - {project}")
    } else {
        format!("New Contact Form Submission from {name}")
    }
}

// Field values are interpolated as-is; markup in a submission reaches the
// recipient's mail client unescaped.
pub fn render_submission(submission: &Submission) -> String {
    let heading = if submission.is_enquiry() {
        "Project Enquiry"
    } else {
        "Contact Form Submission"
    };
    let timestamp = submission.timestamp.to_rfc2822();
    let name = or_default(&submission.name, "Unknown");
    let email = or_default(&submission.email, "Not provided");
    let message = or_default(&submission.message, "No message").replace('\n', "<br>");

    let project_line = if submission.is_enquiry() {
        let project = or_default(&submission.project, "N/A");
        format!("\n    <p><strong>Project Interest:</strong> {project}</p>")
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>New {heading}</h2>
    <p><strong>Timestamp:</strong> {timestamp}</p>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>{project_line}
    <p><strong>Message:</strong></p>
    <div style="padding: 10px; border-left: 3px solid #00704A; background-color: #f8f9fa;">
        {message}
    </div>
    <hr>
    <p style="color: #666; font-size: 12px;">This email was sent automatically from your website contact form.</p>
</body>
</html>"#
    )
}

pub fn submission_notification(submission: &Submission, recipient: &str) -> Notification {
    Notification {
        to: recipient.to_string(),
        subject: subject(submission),
        body: render_submission(submission),
        html: true,
    }
}

pub fn setup_test_notification(recipient: &str) -> Notification {
    Notification {
        to: recipient.to_string(),
        subject: SETUP_TEST_SUBJECT.to_string(),
        body: "This is a test email to verify the contact form setup is working correctly."
            .to_string(),
        html: false,
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}
