//! タグ一覧の差分検出
//!
//! マニフェストタグとアーキテクチャ別コンテナタグを突き合わせ、
//! 統合マニフェストが無いバージョンを初出順で列挙します。

use forgeflow_core::split_tag;
use forgeflow_registry::{EntryKind, TagEntry};
use std::collections::{BTreeSet, HashSet};

/// 1回の差分検出の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// 統合マニフェストが無いバージョン（初出順、重複なし）
    pub missing_versions: Vec<String>,

    /// コンテナタグから観測された全アーキテクチャ
    pub observed_architectures: BTreeSet<String>,
}

/// タグ一覧からマニフェスト欠落バージョンと観測アーキテクチャを求める
///
/// `-` を含まない名前のコンテナタグは複合タグではないため読み飛ばす。
pub fn diff(entries: &[TagEntry]) -> Reconciliation {
    let manifest_names: HashSet<&str> = entries
        .iter()
        .filter(|entry| entry.kind() == EntryKind::Manifest)
        .map(|entry| entry.name.as_str())
        .collect();

    let mut missing_versions: Vec<String> = Vec::new();
    let mut observed_architectures = BTreeSet::new();

    for entry in entries.iter().filter(|e| e.kind() == EntryKind::Container) {
        let Some((version, architecture)) = split_tag(&entry.name) else {
            continue;
        };

        observed_architectures.insert(architecture.to_string());

        if !manifest_names.contains(version) && !missing_versions.iter().any(|v| v == version) {
            missing_versions.push(version.to_string());
        }
    }

    Reconciliation {
        missing_versions,
        observed_architectures,
    }
}
