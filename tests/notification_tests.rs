use chrono::{TimeZone, Utc};

use form_intake::email::templates;
use form_intake::models::{Submission, SubmissionFields};

fn submission(fields: SubmissionFields) -> Submission {
    let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
    Submission::received(fields, at)
}

#[test]
fn contact_subject_names_the_sender() {
    let sub = submission(SubmissionFields::new("Ana", "ana@x.com", "Hi"));
    assert_eq!(templates::subject(&sub), "New Contact Form Submission from Ana");
}

#[test]
fn enquiry_subject_names_sender_and_project() {
    let sub = submission(SubmissionFields {
        kind: "enquiry".to_string(),
        project: "Portfolio".to_string(),
        ..SubmissionFields::new("Bo", "bo@x.com", "Hello")
    });
    assert_eq!(
        templates::subject(&sub),
        "New Project Enquiry from Bo - Portfolio"
    );

    let body = templates::render_submission(&sub);
    assert!(body.contains("<h2>New Project Enquiry</h2>"));
    assert!(body.contains("<strong>Project Interest:</strong> Portfolio"));
}

#[test]
fn missing_values_use_display_defaults() {
    let sub = submission(SubmissionFields {
        kind: "enquiry".to_string(),
        ..SubmissionFields::default()
    });
    assert_eq!(templates::subject(&sub), "New Project Enquiry from Unknown - N/A");

    let body = templates::render_submission(&sub);
    assert!(body.contains("<strong>Name:</strong> Unknown"));
    assert!(body.contains("<strong>Email:</strong> Not provided"));
    assert!(body.contains("<strong>Project Interest:</strong> N/A"));
    assert!(body.contains("No message"));
}

#[test]
fn contact_body_has_no_project_line() {
    let sub = submission(SubmissionFields::new("Ana", "ana@x.com", "Hi"));
    let body = templates::render_submission(&sub);
    assert!(body.contains("<h2>New Contact Form Submission</h2>"));
    assert!(!body.contains("Project Interest"));
    assert!(body.contains("Sat, 14 Mar 2026 09:26:53 +0000"));
}

#[test]
fn message_newlines_become_line_breaks() {
    let sub = submission(SubmissionFields::new("Ana", "ana@x.com", "one\ntwo\nthree"));
    let body = templates::render_submission(&sub);
    assert!(body.contains("one<br>two<br>three"));
}

// Field values reach the email body unescaped.
#[test]
fn markup_in_fields_is_not_escaped() {
    let sub = submission(SubmissionFields::new(
        "<b>Mallory</b>",
        "m@x.com",
        "<script>alert(1)</script>",
    ));
    let body = templates::render_submission(&sub);
    assert!(body.contains("<strong>Name:</strong> <b>Mallory</b>"));
    assert!(body.contains("<script>alert(1)</script>"));
}

#[test]
fn submission_notification_goes_to_recipient_as_html() {
    let sub = submission(SubmissionFields::new("Ana", "ana@x.com", "Hi"));
    let n = templates::submission_notification(&sub, "owner@example.com");
    assert_eq!(n.to, "owner@example.com");
    assert!(n.html);
    assert!(n.subject.contains("Ana"));
}

#[test]
fn unknown_type_is_kept_and_treated_as_contact() {
    let sub = submission(SubmissionFields {
        kind: "newsletter".to_string(),
        ..SubmissionFields::new("Ana", "ana@x.com", "Hi")
    });
    assert_eq!(sub.kind, "newsletter");
    assert_eq!(templates::subject(&sub), "New Contact Form Submission from Ana");
}
