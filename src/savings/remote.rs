use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use super::sample::sample_dataset;
use super::source::{validate_dataset, SavingsSource, SourceError};
use super::SavingsDataset;
use crate::debug_println;
use crate::utils::block_on;

/// Responses already fetched in this process, keyed by URL
static DATASET_CACHE: Lazy<RwLock<HashMap<String, SavingsDataset>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Savings API endpoint returning the same document as [`super::FileSource`]
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the dataset (with caching)
    pub async fn fetch_async(&self) -> Result<SavingsDataset, SourceError> {
        if let Some(cached) = self.cached() {
            debug_println!("Savings cache hit for {}", self.url);
            return Ok(cached);
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;
        let dataset: SavingsDataset = serde_json::from_str(&body)?;
        validate_dataset(&dataset)?;

        debug_println!(
            "Fetched {} records and {} trip counts from {}",
            dataset.records.len(),
            dataset.trips.len(),
            self.url
        );

        if let Ok(mut cache) = DATASET_CACHE.write() {
            cache.insert(self.url.clone(), dataset.clone());
        }

        Ok(dataset)
    }

    /// Get the dataset, falling back to the demo series when the endpoint fails
    pub async fn fetch_with_fallback(&self) -> SavingsDataset {
        match self.fetch_async().await {
            Ok(dataset) => dataset,
            Err(e) => {
                eprintln!("Failed to fetch savings from {}: {}", self.url, e);
                eprintln!("Using sample savings data");
                sample_dataset()
            }
        }
    }

    fn cached(&self) -> Option<SavingsDataset> {
        DATASET_CACHE
            .read()
            .ok()
            .and_then(|cache| cache.get(&self.url).cloned())
    }
}

impl SavingsSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn fetch(&self) -> Result<SavingsDataset, SourceError> {
        block_on(self.fetch_async())
    }
}
