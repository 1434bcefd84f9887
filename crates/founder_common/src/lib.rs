//! Founder Common - Shared types and plan pipeline for Founder Assistant
//!
//! Everything the daemon and the CLI agree on lives here: the business plan
//! data model, the wire types, the LLM client abstraction, and the content
//! validation pipeline that sanitizes generated plans before anyone sees them.

pub mod api;
pub mod fallback;
pub mod generator;
pub mod llm_client;
pub mod plan;
pub mod prompts;
pub mod validation;

pub use api::*;
pub use generator::*;
pub use llm_client::*;
pub use plan::*;
pub use validation::*;
