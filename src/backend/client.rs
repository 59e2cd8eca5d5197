//! HTTP client for the interview scheduling backend
//!
//! Thin JSON wrapper over the backend's candidate and interview endpoints.
//! All failures are wrapped with context and surfaced to the error dialog by
//! the caller.

use crate::backend::SchedulerApi;
use crate::scheduling::InterviewPayload;
use crate::state::{Candidate, UserProfile};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

/// Default backend address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8080";

/// Client for the scheduling backend
pub struct SchedulerClient {
    http: reqwest::Client,
    /// Base address of the backend
    address: String,
}

impl SchedulerClient {
    /// Create a new client. The address comes from `RECRUIT_API_ADDRESS`,
    /// falling back to `config_address` (from the config file) and then the
    /// built-in default.
    pub fn new(config_address: Option<String>) -> Result<Self> {
        let address = std::env::var("RECRUIT_API_ADDRESS")
            .ok()
            .or(config_address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, address })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address.trim_end_matches('/'))
    }
}

#[async_trait]
impl SchedulerApi for SchedulerClient {
    async fn check_connection(&self) -> bool {
        match self.http.get(self.url("/v5/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn fetch_current_user(&mut self) -> Result<UserProfile> {
        let response = self
            .http
            .get(self.url("/v5/profile"))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch user profile: {e}"))?;

        response
            .error_for_status()
            .map_err(|e| anyhow!("Profile request rejected: {e}"))?
            .json::<UserProfile>()
            .await
            .context("Failed to decode user profile")
    }

    async fn list_candidates(&mut self) -> Result<Vec<Candidate>> {
        let response = self
            .http
            .get(self.url("/v5/candidates"))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to list candidates: {e}"))?;

        response
            .error_for_status()
            .map_err(|e| anyhow!("Candidate request rejected: {e}"))?
            .json::<Vec<Candidate>>()
            .await
            .context("Failed to decode candidate list")
    }

    async fn add_interview(
        &mut self,
        candidate_id: &str,
        payload: &InterviewPayload,
    ) -> Result<()> {
        let response = self
            .http
            .post(self.url(&format!("/v5/candidates/{candidate_id}/interviews")))
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to schedule interview: {e}"))?;

        response
            .error_for_status()
            .map_err(|e| anyhow!("Interview request rejected: {e}"))?;

        tracing::info!(candidate_id, round = payload.round, "interview scheduled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = SchedulerClient {
            http: reqwest::Client::new(),
            address: "http://localhost:8080/".to_string(),
        };
        assert_eq!(
            client.url("/v5/candidates"),
            "http://localhost:8080/v5/candidates"
        );
    }
}
