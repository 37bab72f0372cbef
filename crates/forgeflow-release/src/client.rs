//! リリースAPIクライアント

use crate::error::{ReleaseError, Result};
use crate::model::{Release, take_recent_tags};
use forgeflow_core::Config;

/// 上流リリースAPIを叩くクライアント
pub struct ReleaseClient {
    http: reqwest::Client,
    base_url: String,
    upstream: String,
}

impl ReleaseClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.releases_api.clone(),
            upstream: config.upstream.clone(),
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "fetching releases");

        let response = self
            .http
            .get(url)
            .header("User-Agent", "forgeflow")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReleaseError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// 最新リリースのタグ名を返す
    pub async fn latest(&self) -> Result<String> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, self.upstream);
        let body = self.fetch(&url).await?;
        let release: Release = serde_json::from_str(&body)?;
        Ok(release.tag_name)
    }

    /// 新しい順に最大 `n` 件のリリースタグ名を返す
    pub async fn latest_n(&self, n: usize) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{}/releases?per_page={}",
            self.base_url, self.upstream, n
        );
        let body = self.fetch(&url).await?;
        let releases: Vec<Release> = serde_json::from_str(&body)?;
        Ok(take_recent_tags(releases, n))
    }
}
