//! User-supplied API key.
//!
//! Held only in memory for the lifetime of one console session. `Debug`
//! and `Display` are redacted so the key cannot leak through logs.

use std::fmt;

use crate::guide::GuideError;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Accept `raw` as a credential. Empty and whitespace-only input is
    /// rejected; the value itself is kept as typed.
    pub fn new(raw: impl Into<String>) -> Result<Self, GuideError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(GuideError::MissingCredential);
        }
        Ok(Self(raw))
    }

    /// The secret itself. Only the provider layer should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
