//! Service health endpoint

use super::Resource;
use crate::{client::Client, error::Result, types::HealthStatus};

/// Health check API resource.
#[derive(Debug, Clone)]
pub struct Health {
    client: Client,
}

impl Health {
    /// Create a new Health resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Check backend health.
    pub async fn check(&self) -> Result<HealthStatus> {
        self.client
            .request(http::Method::GET, "/health")?
            .send()
            .await?
            .parse_result()
    }
}

impl Resource for Health {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_resource_creation() {
        let client = Client::new();
        let health = client.health();

        let _ = health.client();
    }
}
