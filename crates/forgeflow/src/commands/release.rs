//! forge — リリースのビルド・公開ハンドラ
//!
//! 対象バージョンを解決し、1件ずつ順番にオーケストレーターへ渡します。
//! 並列化はしません（1プロセス1ホスト1アーキテクチャ）。

use crate::orchestrator::Orchestrator;
use colored::Colorize;
use forgeflow_core::Config;
use forgeflow_exec::Executor;
use forgeflow_registry::TagSource;
use forgeflow_release::ReleaseClient;

/// 最新リリースを latest としてビルド・公開・整備する
pub async fn handle_latest<S: TagSource, E: Executor>(
    config: &Config,
    registry: &S,
    exec: &E,
) -> anyhow::Result<()> {
    let releases = ReleaseClient::new(config);
    let version = releases.latest().await?;
    println!(
        "{}",
        format!("📦 最新リリース: {} ({})", version, config.upstream).bold()
    );

    let orchestrator = Orchestrator::new(config, registry, exec);
    orchestrator.process_version(&version, true).await?;
    Ok(())
}

/// 新しい順にN件のリリースをビルド・公開・整備する（latest扱いしない）
pub async fn handle_recent<S: TagSource, E: Executor>(
    config: &Config,
    registry: &S,
    exec: &E,
    n: usize,
) -> anyhow::Result<()> {
    let releases = ReleaseClient::new(config);
    let versions = releases.latest_n(n).await?;
    println!(
        "{}",
        format!("📦 対象リリース: {}", versions.join(", ")).bold()
    );

    process_all(config, registry, exec, &versions).await
}

/// 明示されたバージョンをビルド・公開・整備する
///
/// 渡された全バージョンを順番に処理する（先頭1件で打ち切らない）。
pub async fn handle_versions<S: TagSource, E: Executor>(
    config: &Config,
    registry: &S,
    exec: &E,
    versions: &[String],
) -> anyhow::Result<()> {
    process_all(config, registry, exec, versions).await
}

async fn process_all<S: TagSource, E: Executor>(
    config: &Config,
    registry: &S,
    exec: &E,
    versions: &[String],
) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(config, registry, exec);
    for version in versions {
        orchestrator.process_version(version, false).await?;
    }
    Ok(())
}
