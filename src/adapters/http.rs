use crate::domain::model::PostalAddress;
use crate::domain::ports::DirectoryLookup;
use crate::utils::error::{InsightError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

/// `DirectoryLookup` backed by the user service's REST API.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    base_url: String,
    client: Client,
}

impl HttpDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::DirectoryError {
                message: format!("GET {} returned {}", path, status),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl DirectoryLookup for HttpDirectory {
    async fn get_address(&self, user_id: Uuid) -> Result<PostalAddress> {
        let body = self.get_text(&format!("/user/{}/address", user_id)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_live_location(&self, user_id: Uuid) -> Result<Option<String>> {
        let path = format!("/user/{}/location", user_id);
        let response = self.client.get(self.url(&path)).send().await?;
        if !response.status().is_success() {
            tracing::debug!("GET {} returned {}", path, response.status());
            return Ok(None);
        }
        let body = response.text().await?;
        Ok((!body.trim().is_empty()).then_some(body))
    }

    async fn list_vendors(&self) -> Result<String> {
        self.get_text("/vendors").await
    }

    async fn get_vendors_by_id(&self, vendor_ids: &[Uuid]) -> Result<Vec<String>> {
        let mut payloads = Vec::with_capacity(vendor_ids.len());
        for vendor_id in vendor_ids {
            match self.get_text(&format!("/vendors/{}", vendor_id)).await {
                Ok(body) => payloads.push(body),
                Err(InsightError::DirectoryError { message }) => {
                    tracing::warn!("Skipping vendor {}: {}", vendor_id, message);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(payloads)
    }
}
