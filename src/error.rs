use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocketError {
    #[error("{0}")]
    Validation(String),
    #[error("backend call failed: {0}")]
    Backend(String),
    #[error("{SIGN_IN_PROMPT}")]
    Unauthenticated,
}

/// Friendly sentence shown in place of raw unauthenticated-state errors.
pub const SIGN_IN_PROMPT: &str =
    "You are not signed in. Please sign in to continue; your session may have expired.";

const UNAUTHENTICATED_MARKERS: &[&str] = &[
    "anonymous",
    "not authenticated",
    "unauthenticated",
    "actor not available",
];

/// Classify a raw backend failure message at the mutation/query boundary.
///
/// Unauthenticated-state errors are recognized by message matching and mapped
/// to a friendlier sentence; everything else surfaces as a backend failure.
pub fn classify_backend_failure(message: &str) -> DocketError {
    let lowered = message.to_lowercase();
    if UNAUTHENTICATED_MARKERS.iter().any(|m| lowered.contains(m)) {
        DocketError::Unauthenticated
    } else {
        DocketError::Backend(message.to_string())
    }
}
