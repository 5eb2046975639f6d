use std::collections::HashMap;

use axum::http::HeaderMap;
use bytes::Bytes;
use multer::{Constraints, Multipart, SizeLimit};

use crate::store::uploads::{FilePart, MAX_FILES, MAX_FILE_BYTES};

/// The single form field that may carry file parts.
pub const FILE_FIELD: &str = "photos";

/// A parsed multipart submission: text fields plus buffered file parts.
pub struct TaskForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<FilePart>,
}

/// Parse a multipart/form-data body using multer.
///
/// File parts are only accepted under the `photos` field, at most
/// [`MAX_FILES`] of them, each at most [`MAX_FILE_BYTES`].
pub async fn parse_multipart(headers: &HeaderMap, body: Bytes) -> Result<TaskForm, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let constraints =
        Constraints::new().size_limit(SizeLimit::new().per_field(MAX_FILE_BYTES));

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = Multipart::with_constraints(stream, boundary, constraints);

    let mut fields = HashMap::new();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();

        if let Some(file_name) = field.file_name() {
            if name != FILE_FIELD {
                return Err(format!("Unexpected file field: {name}"));
            }
            if files.len() >= MAX_FILES {
                return Err(format!("Too many files (max {MAX_FILES})"));
            }
            let original_name = file_name.to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| format!("File read error: {e}"))?;
            files.push(FilePart {
                original_name,
                data,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| format!("Field read error: {e}"))?;
            fields.insert(name, value);
        }
    }

    Ok(TaskForm { fields, files })
}
