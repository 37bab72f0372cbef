//! タグ一覧APIクライアント

use crate::error::{RegistryError, Result};
use crate::model::TagPage;
use forgeflow_core::Config;

/// 1回の取得で見るページサイズ。1ページ目しか取得しないため、
/// これを超えるタグを持つリポジトリは完全には観測できない（既知の制限）。
const PAGE_SIZE: u32 = 25;

/// タグ一覧の取得先
///
/// 本番実装は [`RegistryClient`]。テストでは固定のページを返すフェイクを使う。
pub trait TagSource: Sync {
    fn list_tags(&self) -> impl std::future::Future<Output = Result<TagPage>> + Send;

    /// 指定した名前のタグが存在するか（毎回取り直す。キャッシュしない）
    fn exists(&self, tag: &str) -> impl std::future::Future<Output = Result<bool>> + Send {
        async move {
            let page = self.list_tags().await?;
            Ok(page.results.iter().any(|entry| entry.name == tag))
        }
    }
}

/// レジストリのタグ一覧APIを叩くクライアント
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    repository: String,
}

impl RegistryClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.registry_api.clone(),
            repository: config.repository.clone(),
        }
    }
}

impl TagSource for RegistryClient {
    async fn list_tags(&self) -> Result<TagPage> {
        let url = format!(
            "{}/repositories/{}/tags?page_size={}&page=1&ordering=last_updated",
            self.base_url, self.repository, PAGE_SIZE
        );

        tracing::debug!(%url, "fetching tag listing");

        let response = self
            .http
            .get(&url)
            .header("User-Agent", "forgeflow")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RegistryError::Status {
                status: response.status(),
                url,
            });
        }

        // トランスポートエラーとデコードエラーを区別するため、
        // 本文を文字列で受けてからデコードする
        let body = response.text().await?;
        let page: TagPage = serde_json::from_str(&body)?;

        tracing::debug!(
            count = page.count,
            fetched = page.results.len(),
            "tag listing fetched"
        );
        Ok(page)
    }
}
