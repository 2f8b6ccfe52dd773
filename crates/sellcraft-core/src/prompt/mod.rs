//! Prompt builders for the four tools.
//!
//! Each builder is a pure, total function: domain inputs in, instruction
//! text plus a `GenerationConfig` out. Builders never fail and never talk
//! to the network; attaching a model id and sending the request is the
//! services' job.

pub mod idea;
pub mod listing;
pub mod promo;
pub mod survey;
pub mod thumbnail;

use sellcraft_types::generation::GenerationConfig;

/// Output of a prompt builder: what to say and how to ask for the answer.
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    pub instruction: String,
    pub config: GenerationConfig,
}

/// JSON Schema for a structured-output request, derived from the Rust
/// response type.
pub(crate) fn schema_value<T: schemars::JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema).expect("schema serialization should not fail")
}
