use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::models::Submission;

/// Append-only submission log, one JSON record per line.
///
/// Single-process, single-writer: each record is written with one
/// `write_all` on a file opened in append mode, so lines never interleave.
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("submissions.jsonl"),
        }
    }

    /// Serialize the submission to a single line and append it,
    /// creating the data directory and file if absent.
    pub async fn append(&self, submission: &Submission) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(submission).map_err(std::io::Error::other)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
