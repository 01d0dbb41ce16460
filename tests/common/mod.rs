use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use form_intake::config::{Config, StatusMode};
use form_intake::email::{Notification, Notifier};
use form_intake::sheet::MemorySheet;

pub const TEST_SHEET_ID: &str = "test-sheet";
pub const TEST_RECIPIENT: &str = "owner@example.com";

/// Captures notifications instead of sending them. Optionally fails every
/// send with a fixed error.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    fail_with: Option<String>,
}

impl RecordingNotifier {
    pub fn failing(error: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(error.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), String> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// A running test server backed by an in-memory sheet.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sheet: Arc<MemorySheet>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with the given content type, return (body, status).
    pub async fn submit_raw(&self, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        sheet_id: TEST_SHEET_ID.to_string(),
        notification_email: TEST_RECIPIENT.to_string(),
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        status_mode: StatusMode::Legacy,
        admin_routes: true,
        log_level: "warn".to_string(),
        smtp: None,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(), RecordingNotifier::default()).await
}

/// Spawn a test app with the given configuration and notifier.
pub async fn spawn_app_with(config: Config, notifier: RecordingNotifier) -> TestApp {
    let sheet = Arc::new(MemorySheet::new(config.sheet_id.clone()));
    let notifier = Arc::new(notifier);

    let app = form_intake::build_app(config, sheet.clone(), notifier.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        sheet,
        notifier,
    }
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
