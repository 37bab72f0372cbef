//! バージョンごとのビルド・公開の進行管理
//!
//! 1バージョンにつき CheckExisting → {Skip | Build → Push} → Reconcile の
//! 順で進みます。ビルドやプッシュの失敗は致命的エラーとして呼び出し側に
//! 返しますが、マニフェスト整備だけはどの経路でも必ず試みてから返します。

use colored::Colorize;
use forgeflow_core::{Config, image_tag};
use forgeflow_exec::Executor;
use forgeflow_manifest::ManifestReconciler;
use forgeflow_registry::TagSource;
use std::collections::BTreeSet;

/// 1バージョン分の処理結果。永続化はしない（レジストリだけが正）
#[derive(Debug, Clone, Copy)]
pub struct BuildOutcome {
    pub skipped: bool,
    pub build_ok: bool,
    pub push_ok: bool,
}

/// ビルド→プッシュ→マニフェスト整備を進める状態機械
pub struct Orchestrator<'a, S, E> {
    config: &'a Config,
    registry: &'a S,
    exec: &'a E,
}

impl<'a, S: TagSource, E: Executor> Orchestrator<'a, S, E> {
    pub fn new(config: &'a Config, registry: &'a S, exec: &'a E) -> Self {
        Self {
            config,
            registry,
            exec,
        }
    }

    /// 1バージョンを処理する
    ///
    /// `latest` が真なら latest タグも付けてビルドし、`latest` マニフェストも
    /// 整備する。ビルド・プッシュの失敗は致命的エラーだが、マニフェスト整備は
    /// その場合でも実行してからエラーを返す。
    pub async fn process_version(&self, version: &str, latest: bool) -> anyhow::Result<BuildOutcome> {
        // バージョン中のハイフンはタグの区切りと衝突して
        // `<version>-<architecture>` が一意に分解できなくなる
        if version.contains('-') {
            anyhow::bail!(
                "バージョン '{}' はハイフンを含むため扱えません（タグの区切り文字と衝突します）",
                version
            );
        }

        println!("{}", format!("● {} を処理します", version).bold());
        tracing::info!(version, latest, "processing version");

        let result = self.check_build_push(version, latest).await;
        // 失敗していてもマニフェスト整備は必ず試みる
        self.reconcile_on_exit(version, latest).await;
        result
    }

    async fn check_build_push(&self, version: &str, latest: bool) -> anyhow::Result<BuildOutcome> {
        let local_tag = image_tag(version, &self.config.local_architecture);

        if self.registry.exists(&local_tag).await? {
            println!(
                "{}",
                format!(
                    "⏭ {} は既にビルド済みです（タグ {} が存在）",
                    version, local_tag
                )
                .dimmed()
            );
            return Ok(BuildOutcome {
                skipped: true,
                build_ok: false,
                push_ok: false,
            });
        }

        let tags = self.target_tags(version, latest);
        self.build(version, &tags).await?;
        for tag in &tags {
            self.push(tag).await?;
        }

        Ok(BuildOutcome {
            skipped: false,
            build_ok: true,
            push_ok: true,
        })
    }

    /// このホストで作る対象タグ（バージョンタグ + latestタグ）
    fn target_tags(&self, version: &str, latest: bool) -> Vec<String> {
        let arch = &self.config.local_architecture;
        let mut tags = vec![format!("{}:{}", self.config.repository, image_tag(version, arch))];
        if latest {
            tags.push(format!(
                "{}:{}",
                self.config.repository,
                image_tag("latest", arch)
            ));
        }
        tags
    }

    async fn build(&self, version: &str, tags: &[String]) -> anyhow::Result<()> {
        println!("🔨 {} をビルドしています...", version.cyan());

        let mut tokens = vec![
            "docker".to_string(),
            "build".to_string(),
            "--build-arg".to_string(),
            format!("VERSION={}", version),
        ];
        for tag in tags {
            tokens.push("-t".to_string());
            tokens.push(tag.clone());
        }
        tokens.push(self.config.build_context.clone());

        self.exec
            .run(&tokens)
            .await
            .map_err(|error| anyhow::anyhow!("イメージのビルドに失敗しました: {}", error))?;

        println!("{}", format!("✓ {} をビルドしました", version).green());
        Ok(())
    }

    async fn push(&self, tag: &str) -> anyhow::Result<()> {
        println!("📤 {} をプッシュしています...", tag.cyan());

        let tokens = vec!["docker".to_string(), "push".to_string(), tag.to_string()];
        self.exec
            .run(&tokens)
            .await
            .map_err(|error| anyhow::anyhow!("{} のプッシュに失敗しました: {}", tag, error))?;

        println!("{}", format!("✓ {} をプッシュしました", tag).green());
        Ok(())
    }

    /// マニフェスト整備（どの経路からも必ず呼ばれる）
    ///
    /// ここでの失敗は報告のみで、バージョン処理全体の結果には影響しない。
    async fn reconcile_on_exit(&self, version: &str, latest: bool) {
        let reconciler = ManifestReconciler::new(self.registry, self.exec, self.config);
        let architectures: BTreeSet<String> =
            self.config.default_architectures.iter().cloned().collect();

        reconciler.reconcile(version, &architectures).await;
        if latest {
            reconciler.reconcile("latest", &architectures).await;
        }
    }
}
