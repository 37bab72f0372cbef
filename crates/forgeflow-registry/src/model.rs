//! タグ一覧APIのデータモデル

use serde::Deserialize;

/// マニフェスト系メディアタイプを識別する部分文字列
const MANIFEST_MEDIA_TYPE_MARKER: &str = "distribution.manifest";

/// タグ一覧の1ページ
///
/// `count` はリポジトリ全体のタグ数。`results` は取得したページ分だけなので、
/// `count > results.len()` になり得る（1ページ目しか見ない既知の制限）。
#[derive(Debug, Clone, Deserialize)]
pub struct TagPage {
    pub count: u64,
    pub results: Vec<TagEntry>,
}

/// タグ一覧の1エントリ
#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    pub name: String,

    /// レジストリが報告するメディアタイプ。分類は [`TagEntry::kind`] で行う
    pub media_type: Option<String>,

    /// このタグが参照するアーキテクチャ別イメージ
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// タグが参照する1イメージ分のレコード
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub architecture: Option<String>,
    pub variant: Option<String>,
}

/// エントリの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// マルチアーキテクチャの統合マニフェスト
    Manifest,
    /// アーキテクチャ別のコンテナイメージ
    Container,
}

impl TagEntry {
    /// メディアタイプの部分文字列からエントリを分類
    pub fn kind(&self) -> EntryKind {
        match &self.media_type {
            Some(media_type) if media_type.contains(MANIFEST_MEDIA_TYPE_MARKER) => {
                EntryKind::Manifest
            }
            _ => EntryKind::Container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, media_type: Option<&str>) -> TagEntry {
        TagEntry {
            name: name.to_string(),
            media_type: media_type.map(|m| m.to_string()),
            images: Vec::new(),
        }
    }

    /// マニフェスト系メディアタイプがManifestに分類されることを確認
    #[test]
    fn test_kind_manifest() {
        let manifest = entry(
            "1.0.0",
            Some("application/vnd.docker.distribution.manifest.list.v2+json"),
        );
        assert_eq!(manifest.kind(), EntryKind::Manifest);
    }

    /// 通常イメージやメディアタイプ欠落がContainerに分類されることを確認
    #[test]
    fn test_kind_container() {
        let image = entry(
            "1.0.0-x86_64",
            Some("application/vnd.docker.container.image.v1+json"),
        );
        assert_eq!(image.kind(), EntryKind::Container);
        assert_eq!(entry("1.0.0-aarch64", None).kind(), EntryKind::Container);
    }

    /// APIレスポンスのデコードを確認（countは全体数、resultsは1ページ分）
    #[test]
    fn test_decode_page() {
        let json = r#"{
            "count": 42,
            "results": [
                {
                    "name": "1.0.0",
                    "media_type": "application/vnd.docker.distribution.manifest.list.v2+json",
                    "images": [
                        {"architecture": "x86_64"},
                        {"architecture": "aarch64", "variant": "v8"}
                    ]
                },
                {"name": "1.0.0-x86_64", "media_type": "application/vnd.docker.container.image.v1+json"}
            ]
        }"#;
        let page: TagPage = serde_json::from_str(json).expect("page should decode");
        // 1ページ目しか見ないため、countがresultsより大きいことは起こり得る
        assert_eq!(page.count, 42);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].kind(), EntryKind::Manifest);
        assert_eq!(page.results[0].images[0].architecture.as_deref(), Some("x86_64"));
        assert_eq!(page.results[0].images[1].variant.as_deref(), Some("v8"));
        assert_eq!(page.results[1].kind(), EntryKind::Container);
        assert!(page.results[1].images.is_empty());
    }
}
