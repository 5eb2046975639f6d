use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use chrono::Utc;
use tokio::fs;

use crate::models::StoredFile;

/// Maximum number of file parts per submission.
pub const MAX_FILES: usize = 6;
/// Maximum size of a single file part.
pub const MAX_FILE_BYTES: u64 = 8 * 1024 * 1024;

/// One uploaded file part, buffered before it is written to disk.
pub struct FilePart {
    pub original_name: String,
    pub data: Bytes,
}

/// Writes uploaded attachments into a fixed directory under
/// collision-resistant names and reports their stored metadata.
pub struct UploadStore {
    dir: PathBuf,
}

/// Process-wide sequence so two files stored in the same millisecond
/// still get distinct names.
static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write each part to the upload directory, creating it if absent.
    pub async fn store_all(&self, parts: &[FilePart]) -> std::io::Result<Vec<StoredFile>> {
        if parts.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(&self.dir).await?;

        let mut stored = Vec::with_capacity(parts.len());
        for part in parts {
            let safe = sanitize_filename(&part.original_name);
            let token = format!(
                "{}-{}",
                Utc::now().timestamp_millis(),
                UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed)
            );
            let stored_name = format!("{token}_{safe}");

            fs::write(self.dir.join(&stored_name), &part.data).await?;

            stored.push(StoredFile {
                stored_name,
                original_name: part.original_name.clone(),
                size_bytes: part.data.len() as u64,
            });
        }

        Ok(stored)
    }
}

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
