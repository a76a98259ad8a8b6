//! HTTP health probe against the daemon's diagnostics endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use nifictl_core::ports::HealthProbe;

/// Probes the configured diagnostics URL; any 2xx answer counts as
/// ready. Readiness is distinct from liveness: the OS process can exist
/// long before (or after) this endpoint answers.
pub struct HttpHealthProbe {
    url: String,
    client: Client,
}

impl HttpHealthProbe {
    /// Build a probe with a per-request timeout.
    pub fn new(url: String, request_timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
    async fn check(&self) -> bool {
        match self.client.get(&self.url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("health endpoint answered {}", response.status());
                false
            }
            Err(e) => {
                debug!("health probe failed: {e}");
                false
            }
        }
    }
}
