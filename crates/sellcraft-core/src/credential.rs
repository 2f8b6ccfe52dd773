//! Credential gate trait and the bounded probe.
//!
//! Core never reads the API key itself; it only asks whether one is
//! available and, if not, requests that one be provisioned. The probe is
//! bounded so a hung acquisition flow cannot stall a tool forever.

use std::time::Duration;

/// How long to wait for credential acquisition before assuming failure.
pub const CREDENTIAL_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Trait for credential availability and acquisition.
///
/// Implementations live in sellcraft-infra (e.g., `EnvCredentialGate`).
pub trait CredentialGate: Send + Sync {
    /// Whether a usable credential is currently available.
    fn has_credential(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Trigger the acquisition flow. Resolves true once a credential is
    /// in place; may take arbitrarily long or never resolve.
    fn request_credential(&self) -> impl std::future::Future<Output = bool> + Send;
}

/// Ensure a credential is available, acquiring one if needed.
///
/// The acquisition wait is capped at [`CREDENTIAL_PROBE_TIMEOUT`]; a
/// timeout counts as "not available" rather than an error.
pub async fn ensure_credential<G: CredentialGate>(gate: &G) -> bool {
    if gate.has_credential().await {
        return true;
    }

    match tokio::time::timeout(CREDENTIAL_PROBE_TIMEOUT, gate.request_credential()).await {
        Ok(acquired) => acquired,
        Err(_) => {
            tracing::warn!("credential acquisition timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGate {
        present: bool,
        acquires: bool,
    }

    impl CredentialGate for FixedGate {
        async fn has_credential(&self) -> bool {
            self.present
        }

        async fn request_credential(&self) -> bool {
            self.acquires
        }
    }

    struct HangingGate;

    impl CredentialGate for HangingGate {
        async fn has_credential(&self) -> bool {
            false
        }

        async fn request_credential(&self) -> bool {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_present_credential_short_circuits() {
        let gate = FixedGate {
            present: true,
            acquires: false,
        };
        assert!(ensure_credential(&gate).await);
    }

    #[tokio::test]
    async fn test_acquisition_flow_runs_when_missing() {
        let gate = FixedGate {
            present: false,
            acquires: true,
        };
        assert!(ensure_credential(&gate).await);

        let gate = FixedGate {
            present: false,
            acquires: false,
        };
        assert!(!ensure_credential(&gate).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_acquisition_times_out_to_false() {
        assert!(!ensure_credential(&HangingGate).await);
    }
}
