//! Result reporter
//!
//! Renders a submission outcome as a human-readable summary on stdout and
//! yields the success flag consumed by the process exit logic. Absent
//! response fields render as `null` rather than failing.

use serde_json::Value;

use crate::client::SubmissionOutcome;

/// Payload size as the server will receive it, via JSON serialization
pub fn payload_size(payload: &Value) -> usize {
    serde_json::to_vec(payload).map(|body| body.len()).unwrap_or(0)
}

/// Print the target URL and payload size before the request goes out
pub fn announce(url: &str, payload: &Value) {
    println!("Submitting error report to: {}", url);
    println!("Payload size: {} bytes", payload_size(payload));
}

/// Print the outcome summary and return whether the submission succeeded
pub fn render(outcome: &SubmissionOutcome) -> bool {
    if let Some(status) = outcome.status {
        println!("Response status: {}", status);
    }

    if outcome.success {
        println!("✅ Error report submitted successfully!");
        println!(
            "Error ID: {}",
            outcome.report_id().cloned().unwrap_or(Value::Null)
        );
        println!("View URL: {}", outcome.report_url().unwrap_or("null"));
    } else if outcome.is_decode_failure() {
        println!("❌ Invalid JSON response from server");
    } else if outcome.is_transport_failure() {
        println!(
            "❌ Network error: {}",
            outcome.raw_text.as_deref().unwrap_or("unknown transport failure")
        );
    } else {
        println!("❌ Error submission failed!");
        println!("Response: {}", outcome.raw_text.as_deref().unwrap_or(""));
    }

    outcome.success
}
