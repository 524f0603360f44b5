//! Tests for the payload provider
//!
//! These tests verify payload loading, sample generation and the on-disk
//! round-trip used by sample mode.

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::DateTime;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    use crate::error::ClientError;
    use crate::payload::{
        create_sample_payload, load_payload, write_sample_payload, SAMPLE_PAYLOAD_FILE,
    };

    /// Extract the RFC 3339 timestamp a sample embeds after `marker`
    fn embedded_timestamp(text: &str, marker: &str) -> String {
        text.split(marker)
            .nth(1)
            .expect("marker not found in sample text")
            .lines()
            .next()
            .expect("timestamp line missing")
            .to_string()
    }

    /// Remove the timestamped free-text fields so the rest can be compared
    fn strip_timestamped_fields(payload: &mut Value) {
        let obj = payload.as_object_mut().expect("payload is not an object");
        obj.remove("error_details");
        obj.remove("log_data");
    }

    #[test]
    fn load_payload_returns_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payload.json");
        let doc = json!({
            "machine": "qemux86-64",
            "failure_task": "do_compile",
            "build_configuration": {
                "meta_layers": [{"name": "meta", "branch": "test-branch"}]
            }
        });
        fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        let loaded = load_payload(&path).unwrap();

        assert_eq!(loaded, doc);
    }

    #[test]
    fn load_payload_rejects_missing_file() {
        let dir = tempdir().unwrap();

        let err = load_payload(&dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, ClientError::PayloadNotFound { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_payload_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"a":}"#).unwrap();

        let err = load_payload(&path).unwrap_err();

        assert!(matches!(err, ClientError::InvalidPayload(_)));
        // The parser's diagnostic must be surfaced to the user
        assert!(err.to_string().contains("invalid JSON in payload file"));
    }

    #[test]
    fn sample_payload_has_expected_shape() {
        let sample = create_sample_payload();

        assert_eq!(sample["machine"], "qemux86-64");
        assert_eq!(sample["distro"], "poky");
        assert_eq!(sample["failure_task"], "do_compile");
        assert_eq!(sample["error_type"], "CompilationError");
        assert_eq!(sample["branch_commit"], "test-branch:abc123def456789abcdef");

        let layers = sample["build_configuration"]["meta_layers"]
            .as_array()
            .expect("meta_layers is not an array");
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0]["name"], "meta");
        for layer in layers {
            for key in ["name", "path", "commit", "branch"] {
                assert!(layer.get(key).is_some(), "layer missing '{}'", key);
            }
        }
    }

    #[test]
    fn sample_payloads_differ_only_in_timestamped_fields() {
        let mut first = create_sample_payload();
        let mut second = create_sample_payload();

        for sample in [&first, &second] {
            let details = sample["error_details"].as_str().unwrap();
            let log = sample["log_data"].as_str().unwrap();

            let ts = embedded_timestamp(details, "submitted at ");
            DateTime::parse_from_rfc3339(&ts).expect("error_details timestamp not RFC 3339");

            let ts = embedded_timestamp(log, "test error ");
            DateTime::parse_from_rfc3339(&ts).expect("log_data timestamp not RFC 3339");
        }

        strip_timestamped_fields(&mut first);
        strip_timestamped_fields(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_file_round_trips_through_load() {
        let dir = tempdir().unwrap();

        let path = write_sample_payload(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), SAMPLE_PAYLOAD_FILE);

        // Pretty-printed with multi-space indentation
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\n  \"machine\""));

        let mut loaded = load_payload(&path).unwrap();
        let mut reference = create_sample_payload();
        strip_timestamped_fields(&mut loaded);
        strip_timestamped_fields(&mut reference);
        assert_eq!(loaded, reference);
    }
}
