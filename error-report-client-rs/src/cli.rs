//! Command line surface

use std::path::PathBuf;

use clap::Parser;

/// Test client for error report submission to a Yocto-compatible error
/// reporting server.
#[derive(Debug, Parser)]
#[command(name = "send-error-report", version, about)]
pub struct Cli {
    /// Server URL (e.g. http://localhost:8000/ClientPost/JSON/)
    pub server_url: String,

    /// JSON payload file (optional, a sample payload is used if omitted)
    pub payload_file: Option<PathBuf>,

    /// Create a sample payload file and exit without submitting
    #[arg(long)]
    pub create_sample: bool,
}
