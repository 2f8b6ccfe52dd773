//! Tool orchestrators.
//!
//! One service per tool, generic over the provider/snapshot/credential
//! traits so tests can run against in-memory fakes. Each operation is a
//! full build -> invoke -> parse round-trip; state is committed only
//! after the round-trip succeeds.

pub mod creator;
pub mod promoter;
pub mod surveyor;

use sellcraft_types::error::ParseError;
use sellcraft_types::generation::GenerationError;
use thiserror::Error;

/// Errors surfaced by tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("required input was empty")]
    EmptyInput,

    #[error("no credential available")]
    CredentialMissing,

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("response parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("unknown idea id")]
    UnknownIdea,

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl ToolError {
    /// True when the failure means the stored credential must be
    /// re-entered before retrying.
    pub fn requires_reauthentication(&self) -> bool {
        match self {
            ToolError::CredentialMissing => true,
            ToolError::Generation(err) => err.invalidates_credential(),
            _ => false,
        }
    }
}

/// Shared fakes for service tests: a scripted invoker, an in-memory
/// snapshot store, and fixed credential gates.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};

    use sellcraft_types::error::SnapshotError;
    use sellcraft_types::generation::{
        GenerationError, GenerationRequest, GenerationResponse,
    };

    use crate::credential::CredentialGate;
    use crate::provider::ModelInvoker;
    use crate::storage::{SnapshotSlot, SnapshotStore};

    /// Invoker that replays a scripted queue of responses.
    pub struct MockInvoker {
        queue: Mutex<VecDeque<Result<GenerationResponse, GenerationError>>>,
        pub requests: Mutex<Vec<GenerationRequest>>,
    }

    impl MockInvoker {
        pub fn with_responses(
            responses: Vec<Result<GenerationResponse, GenerationError>>,
        ) -> Self {
            Self {
                queue: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn remaining(&self) -> usize {
            self.queue.lock().unwrap().len()
        }
    }

    impl ModelInvoker for MockInvoker {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, GenerationError> {
            self.requests.lock().unwrap().push(request.clone());
            self.queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("mock invoker queue exhausted"))
        }
    }

    /// Snapshot store backed by a shared in-memory map.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        slots: Arc<Mutex<HashMap<&'static str, String>>>,
    }

    impl SnapshotStore for MemoryStore {
        async fn put(&self, slot: SnapshotSlot, value: &str) -> Result<(), SnapshotError> {
            self.slots.lock().unwrap().insert(slot.key(), value.to_string());
            Ok(())
        }

        async fn get(&self, slot: SnapshotSlot) -> Result<Option<String>, SnapshotError> {
            Ok(self.slots.lock().unwrap().get(slot.key()).cloned())
        }

        async fn clear(&self, slot: SnapshotSlot) -> Result<(), SnapshotError> {
            self.slots.lock().unwrap().remove(slot.key());
            Ok(())
        }
    }

    /// Gate with a credential always in place.
    pub struct OpenGate;

    impl CredentialGate for OpenGate {
        async fn has_credential(&self) -> bool {
            true
        }

        async fn request_credential(&self) -> bool {
            true
        }
    }

    /// Gate that never produces a credential.
    pub struct ShutGate;

    impl CredentialGate for ShutGate {
        async fn has_credential(&self) -> bool {
            false
        }

        async fn request_credential(&self) -> bool {
            false
        }
    }

    /// A well-formed 20-idea response payload (10 standard, 10 niche).
    pub fn idea_round_json() -> String {
        let items: Vec<String> = (0..20)
            .map(|i| {
                let kind = if i < 10 { "standard" } else { "niche" };
                format!(
                    r#"{{"title":"アイデア{i}","strength":"強み{i}","solution":"悩み{i}","type":"{kind}"}}"#
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }
}
