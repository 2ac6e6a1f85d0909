//! Shared-secret access gate for the private endpoints.
//!
//! A single static credential, loaded at startup and injected into the
//! handlers' shared state. No rotation, no per-key scoping.

/// Header carrying the credential on gated endpoints.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Compare the provided API key with the configured API key.
///
/// Grants access iff the provided key is present, non-empty, and exactly
/// equal to the configured one. The comparison is byte-for-byte and
/// case-sensitive; no normalization is applied.
pub fn validate_api_key(provided: Option<&str>, configured: &str) -> bool {
    match provided {
        Some(key) if !key.is_empty() => key == configured,
        _ => false,
    }
}
