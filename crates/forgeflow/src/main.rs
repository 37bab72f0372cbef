mod commands;
mod mode;
mod orchestrator;

use clap::Parser;
use colored::Colorize;
use forgeflow_core::Config;
use forgeflow_exec::{CommandRunner, Executor};
use forgeflow_registry::{RegistryClient, TagSource};
use mode::RunMode;

#[derive(Parser)]
#[command(name = "forge")]
#[command(version)]
#[command(
    about = "上流リリースのコンテナイメージをビルドし、マルチアーキテクチャマニフェストを整備する",
    long_about = None
)]
struct Cli {
    /// 処理対象。省略=最新リリース / 正の整数N=新しいN件 /
    /// manifest|manifests=マニフェスト整備のみ / その他=明示バージョン
    targets: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let registry = RegistryClient::new(&config);
    let exec = CommandRunner;

    // 引数の分類も含めて結果を保持し、どの経路でも後始末を通す
    let result = run(&cli.targets, &config, &registry, &exec).await;

    // 成否にかかわらずビルドで溜まった不要イメージを掃除する
    cleanup(&config, &exec).await;

    result
}

async fn run<S: TagSource, E: Executor>(
    targets: &[String],
    config: &Config,
    registry: &S,
    exec: &E,
) -> anyhow::Result<()> {
    match RunMode::classify(targets)? {
        RunMode::Latest => commands::release::handle_latest(config, registry, exec).await,
        RunMode::Recent(n) => commands::release::handle_recent(config, registry, exec, n).await,
        RunMode::Versions(versions) => {
            commands::release::handle_versions(config, registry, exec, &versions).await
        }
        RunMode::Manifests => commands::manifest::handle_manifests(config, registry, exec).await,
    }
}

/// ローカルの不要イメージを削除する。失敗しても実行全体には影響させない
///
/// `skip_cleanup`（環境変数 `FORGE_SKIP_CLEANUP`）が立っている場合は
/// 何もしない。CIやテストからホストのイメージに触れないための逃げ道。
async fn cleanup<E: Executor>(config: &Config, exec: &E) {
    if config.skip_cleanup {
        return;
    }

    let tokens: Vec<String> = ["docker", "image", "prune", "-f"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    if let Err(error) = exec.run(&tokens).await {
        println!(
            "{}",
            format!("⚠ イメージの掃除に失敗しました（無視します）: {}", error).dimmed()
        );
    }
}
