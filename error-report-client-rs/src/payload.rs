//! Payload provider
//!
//! Loads a JSON error report from disk, or synthesizes a complete sample
//! report matching the shape the server's ingestion endpoint expects. The
//! payload is schema-less on the client side: any JSON mapping is accepted
//! and forwarded as-is, validation is the server's job.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info};
use serde_json::{json, Value};

use crate::error::{ClientError, Result};

/// Fixed filename written by sample mode
pub const SAMPLE_PAYLOAD_FILE: &str = "sample-payload.json";

/// Load a JSON payload from the file at `path`.
///
/// Returns `PayloadNotFound` if the path does not exist and `InvalidPayload`
/// (carrying the parser's diagnostic) if the content is not valid JSON.
/// Never forwards a partial payload.
pub fn load_payload(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ClientError::payload_not_found(path));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| ClientError::io(format!("failed to read '{}': {}", path.display(), e)))?;

    let payload: Value = serde_json::from_str(&contents)?;
    debug!("loaded payload from {}", path.display());
    Ok(payload)
}

/// Build a sample error report for testing.
///
/// The shape matches a real Yocto build failure: machine and distro
/// identification, the failing task and package, error and log text, the
/// submitter, and the nested build configuration with its ordered layer
/// list. The current UTC timestamp is embedded in `error_details` and
/// `log_data` so each generated sample is unique per invocation; every
/// other field is a fixed literal.
pub fn create_sample_payload() -> Value {
    let now = Utc::now().to_rfc3339();

    let error_details = format!(
        "Test error submitted at {now}\n\n\
         ERROR: example-package-1.0-r0 do_compile: oe_runmake failed\n\
         ERROR: example-package-1.0-r0 do_compile: Execution of \
         '/path/to/temp/run.do_compile.12345' failed with exit code 1:"
    );

    let log_data = format!(
        "Build log for test error {now}\n\n\
         NOTE: Started PRServer with DBfile: /path/to/build/cache/prserv.sqlite3, \
         Address: 127.0.0.1:46175, PID: 12345\n\
         Loading cache: 100% |########################################| Time: 0:00:01\n\
         Loaded 1234 entries from dependency cache.\n\
         NOTE: Resolving any missing task queue dependencies\n\n\
         Build Configuration:\n\
         BB_VERSION        = \"2.0.0\"\n\
         BUILD_SYS         = \"x86_64-linux\"\n\
         NATIVELSBSTRING   = \"ubuntu-22.04\"\n\
         TARGET_SYS        = \"x86_64-poky-linux\"\n\
         MACHINE           = \"qemux86-64\"\n\
         DISTRO            = \"poky\"\n\
         DISTRO_VERSION    = \"4.0.15\"\n\
         TUNE_FEATURES     = \"m64 core2\"\n\
         TARGET_FPU        = \"\"\n\
         meta              \n\
         meta-poky         \n\
         meta-yocto-bsp    = \"test-branch:abc123def456789\"\n\n\
         NOTE: Fetching tasks for recipe example-package\n\
         ERROR: example-package-1.0-r0 do_compile: oe_runmake failed\n\
         ERROR: Logfile of failure stored in: /path/to/temp/work/core2-64-poky-linux/\
         example-package/1.0-r0/temp/log.do_compile.12345\n\
         Log data truncated\n\
         ERROR: example-package-1.0-r0 do_compile: Function failed: do_compile\n\
         ERROR: Task (/path/to/recipes/example-package/example-package_1.0.bb:do_compile) \
         failed with exit code '1'"
    );

    json!({
        "machine": "qemux86-64",
        "distro": "poky",
        "distro_version": "4.0.15",
        "build_sys": "x86_64-linux",
        "nativelsbstring": "ubuntu-22.04",
        "target_sys": "x86_64-poky-linux",
        "failure_task": "do_compile",
        "failure_package": "example-package",
        "error_type": "CompilationError",
        "error_details": error_details,
        "log_data": log_data,
        "submitter_name": "Test User",
        "submitter_email": "test@example.com",
        "branch_commit": "test-branch:abc123def456789abcdef",
        "build_configuration": {
            "bb_version": "2.0.0",
            "tune_features": "m64 core2",
            "target_fpu": "",
            "meta_layers": [
                {
                    "name": "meta",
                    "path": "/path/to/poky/meta",
                    "commit": "abc123def456789",
                    "branch": "test-branch"
                },
                {
                    "name": "meta-poky",
                    "path": "/path/to/poky/meta-poky",
                    "commit": "abc123def456789",
                    "branch": "test-branch"
                },
                {
                    "name": "meta-yocto-bsp",
                    "path": "/path/to/poky/meta-yocto-bsp",
                    "commit": "abc123def456789",
                    "branch": "test-branch"
                }
            ]
        }
    })
}

/// Write a pretty-printed sample payload to `dir`, returning its path.
///
/// Used by the CLI's `--create-sample` mode, which writes into the working
/// directory and exits without submitting anything.
pub fn write_sample_payload(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(SAMPLE_PAYLOAD_FILE);
    let payload = create_sample_payload();

    let pretty = serde_json::to_string_pretty(&payload)
        .map_err(|e| ClientError::io(format!("failed to serialize sample payload: {}", e)))?;
    fs::write(&path, pretty)
        .map_err(|e| ClientError::io(format!("failed to write '{}': {}", path.display(), e)))?;

    info!("wrote sample payload to {}", path.display());
    Ok(path)
}
