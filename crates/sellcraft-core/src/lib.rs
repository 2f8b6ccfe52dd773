//! Prompt pipeline and business logic for Sellcraft.
//!
//! This crate defines the "ports" (provider, snapshot, credential traits)
//! that the infrastructure layer implements, plus everything pure: the
//! tokenizer, the category taxonomy, prompt builders, response parsers,
//! the listing section extractor, the survey-to-script compiler, and the
//! wizard state machine. It depends only on `sellcraft-types` -- never on
//! `sellcraft-infra` or any HTTP/database crate.

pub mod credential;
pub mod gas;
pub mod listing;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod storage;
pub mod taxonomy;
pub mod text;
pub mod wizard;
