use std::net::IpAddr;

/// Sheet identifiers shipped in deployment templates. Persistence refuses to
/// run against them.
pub const PLACEHOLDER_SHEET_ID: &str = "YOUR_ACTUAL_SHEET_ID";
pub const LEGACY_PLACEHOLDER_SHEET_ID: &str = "YOUR_ACTUAL_GOOGLE_SHEET_ID";

pub fn is_placeholder_sheet_id(id: &str) -> bool {
    let id = id.trim();
    id.is_empty() || id == PLACEHOLDER_SHEET_ID || id == LEGACY_PLACEHOLDER_SHEET_ID
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sheet_id: String,
    pub notification_email: String,
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub status_mode: StatusMode,
    pub admin_routes: bool,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

/// How intake failures map onto HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    /// Always answer 200 and report failure only in the body.
    Legacy,
    /// Answer with the status code of the typed failure.
    Strict,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let sheet_id = env_required("INTAKE_SHEET_ID")?;
        let notification_email = env_required("INTAKE_NOTIFICATION_EMAIL")?;

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let host: IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let status_mode = match env_or("INTAKE_STATUS_MODE", "legacy").as_str() {
            "strict" => StatusMode::Strict,
            _ => StatusMode::Legacy,
        };

        let admin_routes = matches!(
            env_or("INTAKE_ADMIN_ROUTES", "false").as_str(),
            "true" | "1" | "yes"
        );

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("INTAKE_SMTP_HOST").ok(),
            std::env::var("INTAKE_SMTP_PORT").ok(),
            std::env::var("INTAKE_SMTP_USER").ok(),
            std::env::var("INTAKE_SMTP_PASS").ok(),
            std::env::var("INTAKE_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid INTAKE_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        Ok(Config {
            sheet_id,
            notification_email,
            database_url,
            host,
            port,
            max_body_size,
            status_mode,
            admin_routes,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
