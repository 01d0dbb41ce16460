use std::time::{Duration, Instant};

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully!";
pub const ERROR_TEXT: &str = "Sorry, there was an error. Please try again.";

/// How long a message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "contact-message success",
            MessageKind::Error => "contact-message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBanner {
    pub kind: MessageKind,
    pub text: String,
    pub shown_at: Instant,
}

impl MessageBanner {
    pub fn new(kind: MessageKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < MESSAGE_TTL
    }
}

/// Visual state of the submit control.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub loading: bool,
    pub opacity: f32,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            disabled: false,
            loading: false,
            opacity: 1.0,
        }
    }
}

impl SubmitButton {
    pub fn show_loading(&mut self) {
        self.disabled = true;
        self.loading = true;
        self.opacity = 0.7;
    }

    pub fn hide_loading(&mut self) {
        *self = Self::default();
    }
}

/// Rendering seam between the submit flow and whatever displays the form.
pub trait FormView {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_message(&mut self, banner: MessageBanner);
}

/// Keeps the rendered state in memory.
#[derive(Debug, Default)]
pub struct StateView {
    pub button: SubmitButton,
    pub banner: Option<MessageBanner>,
    /// Times the loading state was entered.
    pub loading_count: usize,
}

impl StateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_message(&self, now: Instant) -> Option<&MessageBanner> {
        self.banner.as_ref().filter(|b| b.is_visible_at(now))
    }
}

impl FormView for StateView {
    fn show_loading(&mut self) {
        self.loading_count += 1;
        self.button.show_loading();
    }

    fn hide_loading(&mut self) {
        self.button.hide_loading();
    }

    fn show_message(&mut self, banner: MessageBanner) {
        self.banner = Some(banner);
    }
}
