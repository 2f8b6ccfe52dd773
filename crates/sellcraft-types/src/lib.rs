//! Shared domain types for Sellcraft.
//!
//! This crate contains the core domain types used across the Sellcraft
//! listing assistant: skill ideas, listing sections, survey patterns,
//! generation requests, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror,
//! schemars.

pub mod config;
pub mod error;
pub mod generation;
pub mod idea;
pub mod listing;
pub mod survey;
pub mod wizard;
