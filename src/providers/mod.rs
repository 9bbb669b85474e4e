//! Concrete collaborators for the holiday check.

pub mod google;
pub mod ntfy;
pub mod slack;

use std::time::Duration;

use phstatus_core::{PhStatusError, PhStatusResult};

/// Upper bound for a single Slack or ntfy request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn http_client(timeout: Duration) -> PhStatusResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| PhStatusError::Config(format!("Could not build HTTP client: {e}")))
}
