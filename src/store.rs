//! Remote store client.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::model::NormalizedRecipe;

/// The one operation the batch ingestor needs from a store. The call is
/// treated as opaque: no partial results, no error-cause distinction.
pub trait RecipeStore {
    fn insert(&self, records: &[NormalizedRecipe]) -> Result<(), IngestError>;
}

/// Supabase PostgREST client. Inserts go to `POST /rest/v1/{table}` as one
/// JSON array per batch.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(config: &IngestConfig) -> Result<Self, IngestError> {
        Self::with_base_url(config, config.supabase_url.trim_end_matches('/').to_string())
    }

    #[doc(hidden)]
    pub fn with_base_url(config: &IngestConfig, base_url: String) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(SupabaseStore {
            client,
            base_url,
            service_key: config.service_key.clone(),
            table: config.table.clone(),
        })
    }

    /// Startup connection check. A failure here is fatal; nothing should be
    /// parsed if the store is unreachable or the key is rejected.
    pub fn ping(&self) -> Result<(), IngestError> {
        let response = self
            .client
            .get(format!("{}/rest/v1/", self.base_url))
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .send()?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(IngestError::Store(format!(
                "connection check failed: HTTP {}",
                status
            )))
        }
    }
}

impl RecipeStore for SupabaseStore {
    fn insert(&self, records: &[NormalizedRecipe]) -> Result<(), IngestError> {
        let response = self
            .client
            .post(format!("{}/rest/v1/{}", self.base_url, self.table))
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Prefer", "return=minimal")
            .json(records)
            .send()?;

        let status = response.status();
        if status.is_success() {
            debug!("Inserted {} records into {}", records.len(), self.table);
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(IngestError::Store(format!("HTTP {}: {}", status, body)))
        }
    }
}
