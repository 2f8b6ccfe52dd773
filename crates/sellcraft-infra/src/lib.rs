//! Infrastructure layer for Sellcraft.
//!
//! Contains implementations of the traits defined in `sellcraft-core`:
//! the Gemini HTTP invoker, SQLite snapshot storage, and the environment
//! credential gate, plus the `config.toml` loader.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;
