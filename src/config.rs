use std::net::IpAddr;
use std::path::PathBuf;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub site_origin: String,
    pub upload_dir: PathBuf,
    pub data_dir: PathBuf,
    pub max_body_size: usize,
    pub rate_limit: u32,
    pub rate_limit_window_secs: u64,
    pub trusted_proxies: Vec<IpNet>,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub user: String,
    pub pass: String,
}

#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub from: String,
    pub to: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("TASKAID_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TASKAID_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let site_origin = env_or("SITE_ORIGIN", &format!("http://localhost:{port}"));

        let upload_dir = PathBuf::from(env_or("TASKAID_UPLOAD_DIR", "uploads"));
        let data_dir = PathBuf::from(env_or("TASKAID_DATA_DIR", "data"));

        let max_body_size: usize = env_or("TASKAID_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid TASKAID_MAX_BODY_SIZE: {e}"))?;

        let rate_limit: u32 = env_or("TASKAID_RATE_LIMIT", "60")
            .parse()
            .map_err(|e| format!("Invalid TASKAID_RATE_LIMIT: {e}"))?;

        let rate_limit_window_secs: u64 = env_or("TASKAID_RATE_LIMIT_WINDOW_SECS", "600")
            .parse()
            .map_err(|e| format!("Invalid TASKAID_RATE_LIMIT_WINDOW_SECS: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("TASKAID_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid TASKAID_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("TASKAID_LOG_LEVEL", "info");

        // SMTP is optional: host, user and pass must all be set to enable it.
        let smtp = match (
            std::env::var("SMTP_HOST").ok(),
            std::env::var("SMTP_USER").ok(),
            std::env::var("SMTP_PASS").ok(),
        ) {
            (Some(host), Some(user), Some(pass)) => Some(SmtpConfig {
                host,
                port: env_or("SMTP_PORT", "587")
                    .parse()
                    .map_err(|e| format!("Invalid SMTP_PORT: {e}"))?,
                secure: env_or("SMTP_SECURE", "false") == "true",
                user,
                pass,
            }),
            _ => None,
        };

        let notify = NotifyConfig {
            from: env_or("NOTIFY_EMAIL_FROM", "TaskAid <no-reply@taskaid.com.au>"),
            to: std::env::var("NOTIFY_EMAIL_TO").ok(),
        };

        Ok(Config {
            host,
            port,
            site_origin,
            upload_dir,
            data_dir,
            max_body_size,
            rate_limit,
            rate_limit_window_secs,
            trusted_proxies,
            log_level,
            smtp,
            notify,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
