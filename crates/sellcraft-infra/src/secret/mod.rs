//! Credential backends.

pub mod env;

pub use env::EnvCredentialGate;
