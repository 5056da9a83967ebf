//! Notification sink client
//!
//! Hands matched team-member ids to the email service, which owns rendering
//! and delivery.

use std::time::Duration;

use leadflow_core::{Lead, LeadflowError, LeadflowResult};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

/// Payload for the email service's team-notification endpoint
#[derive(Debug, Serialize)]
struct TeamNotification<'a> {
    lead_id: i64,
    lead_info: &'a Lead,
    team_member_ids: &'a [i64],
}

/// HTTP client for the email service
#[derive(Debug, Clone)]
pub struct NotifierClient {
    client: Client,
    base_url: String,
}

impl NotifierClient {
    /// Create a new notifier client
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

    /// Notify the matched team members about a lead
    #[instrument(skip(self, lead), fields(lead_id = lead.id))]
    pub async fn send_team_notification(
        &self,
        lead: &Lead,
        team_member_ids: &[i64],
    ) -> LeadflowResult<()> {
        let url = format!("{}/send-team-notification", self.base_url);
        debug!(
            "Notifying {} team member(s) about lead {}",
            team_member_ids.len(),
            lead.id
        );

        let payload = TeamNotification {
            lead_id: lead.id,
            lead_info: lead,
            team_member_ids,
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LeadflowError::network(format!("Failed to reach email service: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LeadflowError::api(format!(
                "Email service error ({}): {}",
                status, body
            )));
        }

        Ok(())
    }
}
