//! Browser-side submit flow for the contact form.
//!
//! The handler treats any completed HTTP exchange as a successful
//! submission. The acknowledgement body is kept on the outcome but its
//! `success` flag does not change what the visitor is shown.

pub mod form;
pub mod view;

use crate::models::Acknowledgement;

pub use form::{FieldState, Form, FormError};
pub use view::{
    FormView, MessageBanner, MessageKind, StateView, SubmitButton, ERROR_TEXT, SUCCESS_TEXT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint answered, whatever the status or body.
    Delivered { status: u16, body: String },
    /// The request never completed.
    TransportFailed { error: String },
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered { .. })
    }

    /// The endpoint's own verdict, if the body parses as one.
    pub fn acknowledgement(&self) -> Option<Acknowledgement> {
        match self {
            SubmitOutcome::Delivered { body, .. } => serde_json::from_str(body).ok(),
            SubmitOutcome::TransportFailed { .. } => None,
        }
    }
}

pub struct FormHandler {
    client: reqwest::Client,
}

impl FormHandler {
    /// No timeout is set; a hung endpoint keeps the form in its loading
    /// state until the transport gives up.
    pub fn new() -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// POST the form to its action URL and render the result.
    ///
    /// On delivery the form is cleared. On transport failure the entered
    /// values stay. The loading state is left in both cases. Concurrent
    /// calls are not serialized.
    pub async fn submit<V>(&self, form: &mut Form, view: &mut V) -> SubmitOutcome
    where
        V: FormView + ?Sized,
    {
        let payload = form.payload();
        view.show_loading();

        let outcome = match self.client.post(form.action()).form(&payload).send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();

                view.show_message(MessageBanner::new(MessageKind::Success, SUCCESS_TEXT));
                form.reset();
                SubmitOutcome::Delivered { status, body }
            }
            Err(e) => {
                tracing::error!("Form submission error: {e}");
                view.show_message(MessageBanner::new(MessageKind::Error, ERROR_TEXT));
                SubmitOutcome::TransportFailed {
                    error: e.to_string(),
                }
            }
        };

        view.hide_loading();
        outcome
    }
}
