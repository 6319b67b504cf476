//! agentlab -- Environment Bootstrap for AI-Agent Demos
//!
//! Prepares a local machine for running the example agent
//! demonstrations: loads `.env` configuration, verifies the OpenAI
//! API credential, and provides the shared runtime utilities the
//! demos rely on (logging, errors, retries, input validation).

pub mod types;
pub mod config;
pub mod error;
pub mod env_file;
pub mod keys;
pub mod logging;
pub mod retry;
pub mod setup;
pub mod validation;
