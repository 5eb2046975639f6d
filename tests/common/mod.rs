use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::multipart::Form;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tempfile::TempDir;

use taskaid::config::{Config, NotifyConfig};

/// A running test server instance backed by a temporary directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub upload_dir: PathBuf,
    pub data_dir: PathBuf,
    _tmp: TempDir,
}

/// A complete set of valid required fields.
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("category", "Plumbing"),
        ("title", "Leak fix"),
        ("description", "Kitchen tap leaking"),
        ("suburb", "Bondi"),
        ("postcode", "2026"),
        ("name", "J. Smith"),
        ("mobile", "0400000000"),
        ("email", "j@example.com"),
        ("contactPref", "phone"),
        ("timing", "ASAP"),
    ]
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit text fields as multipart form data, return (body, status).
    pub async fn submit(&self, fields: &[(&str, &str)]) -> (Value, StatusCode) {
        let mut form = Form::new();
        for (key, value) in fields {
            form = form.text(key.to_string(), value.to_string());
        }
        self.submit_form(form).await
    }

    /// Submit a prepared multipart form, return (body, status).
    pub async fn submit_form(&self, form: Form) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/tasks"))
            .multipart(form)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }

    /// Read back all records in the submission log.
    pub fn log_lines(&self) -> Vec<Value> {
        let path = self.data_dir.join("submissions.jsonl");
        if !path.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(path)
            .expect("failed to read submission log")
            .lines()
            .map(|line| serde_json::from_str(line).expect("log line is not valid JSON"))
            .collect()
    }

    /// List stored upload filenames.
    pub fn stored_uploads(&self) -> Vec<String> {
        if !self.upload_dir.exists() {
            return Vec::new();
        }
        std::fs::read_dir(&self.upload_dir)
            .expect("failed to read upload dir")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

/// Spawn a test app with default config and fresh temp directories.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_config(|_| {}).await
}

/// Spawn a test app, letting the caller tweak the config first.
pub async fn spawn_app_with_config(customize: impl FnOnce(&mut Config)) -> TestApp {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let upload_dir = tmp.path().join("uploads");
    let data_dir = tmp.path().join("data");

    let mut config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        site_origin: "http://localhost:0".to_string(),
        upload_dir: upload_dir.clone(),
        data_dir: data_dir.clone(),
        max_body_size: 1_048_576,
        rate_limit: 60,
        rate_limit_window_secs: 600,
        trusted_proxies: vec![],
        log_level: "warn".to_string(),
        smtp: None,
        notify: NotifyConfig {
            from: "TaskAid <no-reply@taskaid.com.au>".to_string(),
            to: None,
        },
    };
    customize(&mut config);

    let app = taskaid::build_app(config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        upload_dir,
        data_dir,
        _tmp: tmp,
    }
}
