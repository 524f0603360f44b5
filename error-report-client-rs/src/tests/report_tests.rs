//! Tests for the result reporter

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::SubmissionOutcome;
    use crate::report::{payload_size, render};

    #[test]
    fn payload_size_matches_serialized_length() {
        let payload = json!({"a": 1});
        assert_eq!(payload_size(&payload), r#"{"a":1}"#.len());
    }

    #[test]
    fn render_success_returns_true() {
        let outcome = SubmissionOutcome::accepted(json!({"id": 42, "url": "http://x/42"}));
        assert!(render(&outcome));
    }

    #[test]
    fn render_tolerates_missing_response_fields() {
        // A success body without id/url renders null placeholders, no panic
        let outcome = SubmissionOutcome::accepted(json!({"status": "success"}));

        assert_eq!(outcome.report_id(), None);
        assert_eq!(outcome.report_url(), None);
        assert!(render(&outcome));
    }

    #[test]
    fn render_failure_returns_false() {
        assert!(!render(&SubmissionOutcome::rejected(400, "bad request")));
        assert!(!render(&SubmissionOutcome::decode_failure()));
        assert!(!render(&SubmissionOutcome::transport_failure(
            "connection error: connection refused"
        )));
    }
}
