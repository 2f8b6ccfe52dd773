//! Environment variable credential gate.
//!
//! Reads the Gemini API key from `GEMINI_API_KEY`. Environment variables
//! are read-only from inside the process, so the acquisition flow cannot
//! provision a key here; it only re-checks whether one appeared.

use secrecy::SecretString;

use sellcraft_core::credential::CredentialGate;

/// Environment variable name holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Credential gate backed by the process environment.
pub struct EnvCredentialGate;

impl EnvCredentialGate {
    pub fn new() -> Self {
        Self
    }

    /// Read the API key, if present and non-empty.
    ///
    /// Wrapped in [`SecretString`] so the key never appears in Debug or
    /// Display output downstream.
    pub fn api_key(&self) -> Option<SecretString> {
        match std::env::var(API_KEY_VAR) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            _ => None,
        }
    }
}

impl Default for EnvCredentialGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialGate for EnvCredentialGate {
    async fn has_credential(&self) -> bool {
        self.api_key().is_some()
    }

    async fn request_credential(&self) -> bool {
        // No interactive flow for env vars. Re-check in case the key was
        // injected by a supervisor since the last probe.
        self.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    // Single test so concurrent test threads never race on the env var.
    #[tokio::test]
    async fn test_env_gate_key_states() {
        // SAFETY: No other test touches this env var.
        unsafe { std::env::set_var(API_KEY_VAR, "test-key-not-real") };
        let gate = EnvCredentialGate::new();
        assert!(gate.has_credential().await);
        assert_eq!(
            gate.api_key().unwrap().expose_secret(),
            "test-key-not-real"
        );

        // A whitespace-only key counts as missing.
        // SAFETY: As above.
        unsafe { std::env::set_var(API_KEY_VAR, "   ") };
        assert!(!gate.has_credential().await);
        assert!(!gate.request_credential().await);

        // SAFETY: Cleanup of the var set above.
        unsafe { std::env::remove_var(API_KEY_VAR) };
    }
}
