//! Session-stored state.
//!
//! The bearer token is the only value persisted per client; the user record
//! is re-fetched from the HR API on every resolution.

/// Session keys for persisted state.
pub mod session_keys {
    /// Key for the stored HR API bearer token.
    pub const HR_TOKEN: &str = "hr_token";
}
