//! forge manifests — マニフェスト整備のみを実行する
//!
//! バージョン解決もビルドも行わず、レジストリの現状だけを見て
//! 欠けている統合マニフェストを作り直します。

use colored::Colorize;
use forgeflow_core::Config;
use forgeflow_exec::Executor;
use forgeflow_manifest::ManifestReconciler;
use forgeflow_registry::TagSource;

pub async fn handle_manifests<S: TagSource, E: Executor>(
    config: &Config,
    registry: &S,
    exec: &E,
) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("🔍 {} のマニフェストを確認しています...", config.repository).bold()
    );

    let reconciler = ManifestReconciler::new(registry, exec, config);
    let all_ok = reconciler.reconcile_all_missing().await?;

    if all_ok {
        Ok(())
    } else {
        Err(anyhow::anyhow!("整備できなかったマニフェストがあります"))
    }
}
