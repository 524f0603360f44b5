//! Unit tests for the error report client
//!
//! This module contains tests for the payload provider, the submission
//! client (against a wiremock server) and the result reporter.

pub mod payload_tests;
pub mod report_tests;
