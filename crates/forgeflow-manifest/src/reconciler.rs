//! マニフェストの整備
//!
//! 欠落しているバージョンの統合マニフェストをマニフェストツールで
//! 作成・プッシュします。2アーキテクチャ未満しか揃っていないバージョンは
//! 対象外です（片方しか無いマニフェストを公開しない）。

use crate::diff::diff;
use colored::Colorize;
use forgeflow_core::{Config, image_tag};
use forgeflow_exec::Executor;
use forgeflow_registry::TagSource;
use std::collections::BTreeSet;

/// 統合マニフェストの作成・プッシュを担うコンポーネント
pub struct ManifestReconciler<'a, S, E> {
    registry: &'a S,
    exec: &'a E,
    repository: String,
}

impl<'a, S: TagSource, E: Executor> ManifestReconciler<'a, S, E> {
    pub fn new(registry: &'a S, exec: &'a E, config: &Config) -> Self {
        Self {
            registry,
            exec,
            repository: config.repository.clone(),
        }
    }

    /// 1バージョン分の統合マニフェストを作成してプッシュする
    ///
    /// 戻り値はこのバージョンの整備に成功したか。
    /// プッシュ失敗は報告のみで成功扱いのまま（作成済みのローカル定義は
    /// 有効とみなす。リトライはしない）。
    pub async fn reconcile(&self, version: &str, architectures: &BTreeSet<String>) -> bool {
        if architectures.len() < 2 {
            println!(
                "{}",
                format!(
                    "⚠ {}: アーキテクチャが {} 種類しか無いためマニフェストを作成できません（2種類以上必要）",
                    version,
                    architectures.len()
                )
                .yellow()
            );
            return false;
        }

        let manifest = format!("{}:{}", self.repository, version);
        tracing::info!(%manifest, "reconciling manifest");

        // 古いローカル定義が残っているとcreateが失敗するため先に消す。
        // レジストリには触らない操作なので、失敗は無視する。
        let _ = self
            .exec
            .run(&command(&["manifest", "rm", &manifest]))
            .await;

        let mut create = command(&["manifest", "create", &manifest]);
        for architecture in architectures {
            create.push(format!(
                "{}:{}",
                self.repository,
                image_tag(version, architecture)
            ));
        }

        if let Err(error) = self.exec.run(&create).await {
            println!(
                "{}",
                format!("✗ {}: マニフェストの作成に失敗しました\n{}", version, error).red()
            );
            return false;
        }

        match self.exec.run(&command(&["manifest", "push", &manifest])).await {
            Ok(_) => {
                println!(
                    "{}",
                    format!("✓ {} のマニフェストをプッシュしました", manifest).green()
                );
            }
            Err(error) => {
                println!(
                    "{}",
                    format!(
                        "⚠ {}: マニフェストのプッシュに失敗しました（作成済み）\n{}",
                        version, error
                    )
                    .yellow()
                );
            }
        }

        true
    }

    /// タグ一覧を取り直し、マニフェストの無い全バージョンを整備する
    ///
    /// 全バージョンの整備に成功した場合のみ `true`。
    /// タグ一覧の取得失敗は致命的エラーとして呼び出し側に返す。
    pub async fn reconcile_all_missing(&self) -> forgeflow_registry::Result<bool> {
        let page = self.registry.list_tags().await?;
        let plan = diff(&page.results);

        if plan.missing_versions.is_empty() {
            println!("{}", "✓ 全バージョンにマニフェストが揃っています".green());
            return Ok(true);
        }

        tracing::info!(
            missing = plan.missing_versions.len(),
            architectures = plan.observed_architectures.len(),
            "found versions without a combined manifest"
        );

        let mut all_ok = true;
        for version in &plan.missing_versions {
            let ok = self
                .reconcile(version, &plan.observed_architectures)
                .await;
            all_ok = all_ok && ok;
        }
        Ok(all_ok)
    }
}

fn command(args: &[&str]) -> Vec<String> {
    let mut tokens = vec!["docker".to_string()];
    tokens.extend(args.iter().map(|a| a.to_string()));
    tokens
}
