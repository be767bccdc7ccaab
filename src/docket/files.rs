use crate::error::DocketError;
use serde::{Deserialize, Serialize};

pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Containers accepted for the motivational splash video.
const ALLOWED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];

/// Opaque handle to stored file content. The client never interprets the
/// bytes; it only forwards the handle to the backend or hands out a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlobHandle {
    Url(String),
    Bytes(Vec<u8>),
}

impl BlobHandle {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }

    /// Direct-fetch URL, when the content lives behind one.
    pub fn direct_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Bytes(_) => None,
        }
    }

    pub fn byte_len(&self) -> u64 {
        match self {
            Self::Url(_) => 0,
            Self::Bytes(bytes) => bytes.len() as u64,
        }
    }
}

/// Client-side size check, run before any upload is attempted.
pub fn validate_file_size(size_bytes: u64) -> Result<(), DocketError> {
    if size_bytes > MAX_FILE_SIZE_BYTES {
        let mb = size_bytes as f64 / 1024.0 / 1024.0;
        return Err(DocketError::Validation(format!(
            "File size exceeds 50MB limit. Your file is {mb:.2}MB."
        )));
    }
    Ok(())
}

/// Container check for the motivational splash video. Advisory-grade: only
/// the filename extension is inspected; codecs inside the container are the
/// player's problem.
pub fn validate_video_container(file_name: &str) -> Result<(), DocketError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if ALLOWED_VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(DocketError::Validation(format!(
            "Unsupported video container \"{file_name}\". Use an mp4 or webm file."
        )))
    }
}

/// Drive an upload progress callback synchronously over `total_bytes`,
/// reporting fractional percentages and always finishing at 100.0.
pub fn report_upload_progress(
    total_bytes: u64,
    chunk_bytes: u64,
    on_progress: &mut dyn FnMut(f64),
) {
    if total_bytes == 0 || chunk_bytes == 0 {
        on_progress(100.0);
        return;
    }

    let mut sent = 0u64;
    while sent < total_bytes {
        sent = (sent + chunk_bytes).min(total_bytes);
        on_progress(sent as f64 / total_bytes as f64 * 100.0);
    }
}
