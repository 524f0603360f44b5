//! # Error Report Client
//!
//! A test client for a Yocto-compatible error reporting server.
//!
//! This crate provides:
//!
//! - A payload provider that loads a JSON error report from disk or
//!   synthesizes a complete sample report
//! - A submission client that POSTs the report to the server's
//!   `/ClientPost/JSON/` ingestion endpoint and classifies the outcome
//! - A result reporter that renders the outcome and drives the process
//!   exit status
//!
//! ## Architecture
//!
//! The client is a single linear pipeline:
//!
//! - `payload`: load or generate the report (`serde_json::Value`, schema-less)
//! - `client`: one POST attempt with a bounded timeout, no retries
//! - `report`: human-readable summary on stdout, success flag for exit logic
//!
//! Failures establishing or completing the HTTP exchange are recovered into
//! a failed [`SubmissionOutcome`], never a panic; only payload loading,
//! sample writing and client construction surface a [`ClientError`].

// Re-export error handling
pub mod error;
pub use error::{ClientError, Result};

// Re-export configuration
pub mod config;
pub use config::ClientConfig;

// Re-export the payload provider
pub mod payload;
pub use payload::{create_sample_payload, load_payload, write_sample_payload};

// Re-export the submission client
pub mod client;
pub use client::{SubmissionClient, SubmissionOutcome};

// Re-export the result reporter
pub mod report;

// Command line surface
pub mod cli;

#[cfg(test)]
mod tests;
