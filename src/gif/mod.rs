// src/gif/mod.rs
// GIF retrieval. Search failures never surface: the fetcher degrades to a
// fixed fallback so a missing image cannot abort a reply.

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BanterConfig;

/// Shown whenever search comes back empty or broken.
pub const FALLBACK_GIF_URL: &str = "https://media.giphy.com/media/l2JHRhAtnJSDNJ2py/giphy.gif";

/// Image-search collaborator seam. Returns candidate URLs, possibly none.
#[async_trait]
pub trait GifSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// Pick one GIF URL for `query`.
///
/// Selection among candidates is uniformly random on purpose (variety, same
/// spirit as the sampling temperature), and every failure mode collapses to
/// the fallback URL.
pub async fn fetch_gif(provider: &dyn GifSearch, query: &str) -> String {
    match provider.search(query).await {
        Ok(urls) => match urls.choose(&mut rand::rng()) {
            Some(url) => url.clone(),
            None => {
                warn!("GIF search returned no results for {query:?}, using fallback");
                FALLBACK_GIF_URL.to_string()
            }
        },
        Err(e) => {
            warn!("GIF search failed for {query:?}: {e:#}");
            FALLBACK_GIF_URL.to_string()
        }
    }
}

pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: String,
    limit: usize,
    rating: String,
}

impl GiphyClient {
    pub fn new(config: &BanterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.gif_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.giphy_base_url.clone(),
            api_key: config.giphy_api_key.clone(),
            limit: config.gif_limit,
            rating: config.gif_rating.clone(),
        })
    }
}

#[async_trait]
impl GifSearch for GiphyClient {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let limit = self.limit.to_string();

        debug!("Giphy search: q={query:?} limit={limit} rating={}", self.rating);

        let response = self
            .client
            .get(format!("{}/v1/gifs/search", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", query),
                ("limit", limit.as_str()),
                ("rating", self.rating.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(anyhow!("Giphy API error {}: {}", status, error_text));
        }

        let raw = response.json::<Value>().await?;

        let data = raw["data"]
            .as_array()
            .ok_or_else(|| anyhow!("No data array in Giphy response"))?;

        Ok(data
            .iter()
            .filter_map(|hit| hit["images"]["original"]["url"].as_str())
            .map(String::from)
            .collect())
    }
}
