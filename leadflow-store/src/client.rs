//! Lead store API client
//!
//! Provides access to the lead and team-member records held by the
//! database service.

use std::time::Duration;

use async_trait::async_trait;
use leadflow_core::{Lead, LeadflowError, LeadflowResult, TeamMember};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

/// Read access to lead and team-member records
///
/// The HTTP client below is the production implementation; tests substitute
/// scripted doubles.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Fetch a single lead by id
    async fn get_lead(&self, lead_id: i64) -> LeadflowResult<Lead>;

    /// Fetch the full team-member set
    async fn list_team_members(&self) -> LeadflowResult<Vec<TeamMember>>;
}

/// HTTP client for the database service
#[derive(Debug, Clone)]
pub struct LeadStoreClient {
    client: Client,
    base_url: String,
}

impl LeadStoreClient {
    /// Create a new lead store client
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LeadStore for LeadStoreClient {
    #[instrument(skip(self))]
    async fn get_lead(&self, lead_id: i64) -> LeadflowResult<Lead> {
        let url = format!("{}/leads/{}", self.base_url, lead_id);
        debug!("Fetching lead from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LeadflowError::network(format!("Failed to fetch lead {}: {}", lead_id, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LeadflowError::not_found(format!("Lead {} not found", lead_id)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LeadflowError::api(format!(
                "Lead store error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LeadflowError::parse(format!("Failed to parse lead response: {}", e)))
    }

    #[instrument(skip(self))]
    async fn list_team_members(&self) -> LeadflowResult<Vec<TeamMember>> {
        let url = format!("{}/team-members", self.base_url);
        debug!("Fetching team members from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LeadflowError::network(format!("Failed to fetch team members: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LeadflowError::api(format!(
                "Lead store error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LeadflowError::parse(format!("Failed to parse team members response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = LeadStoreClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    #[ignore] // Requires a running database service
    async fn fetch_team_members_live() {
        let base = std::env::var("DATABASE_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let client = LeadStoreClient::new(base);

        let members = client
            .list_team_members()
            .await
            .expect("Failed to fetch team members");
        assert!(!members.is_empty());
    }
}
