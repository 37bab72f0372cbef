//! 外部コマンドの実行
//!
//! トークン列の先頭をプログラム、残りを引数として同期的に実行します。
//! 実行中はスピナーを表示し、どの経路でも停止してから結果を返します。
//! タイムアウトはありません。ハングした子プロセスは呼び出し側を
//! ブロックし続けます（既知の制限）。

use crate::error::{ExecError, Result};
use crate::progress::ProgressTicker;

/// 正常終了したコマンドの出力
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// 外部コマンド実行の差し替え点
///
/// 本番では [`CommandRunner`]、テストでは呼び出しを記録するフェイクを使う。
pub trait Executor {
    fn run(
        &self,
        tokens: &[String],
    ) -> impl std::future::Future<Output = Result<CommandOutput>> + Send;
}

/// スピナー付きで実際に子プロセスを起動する実装
pub struct CommandRunner;

impl CommandRunner {
    async fn spawn_and_wait(tokens: &[String]) -> Result<CommandOutput> {
        let (program, args) = tokens.split_first().ok_or(ExecError::Empty)?;

        tracing::debug!(command = %tokens.join(" "), "running external command");

        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            let code = output.status.code().unwrap_or(-1);
            let mut combined = stdout;
            if !stderr.is_empty() {
                if !combined.is_empty() {
                    combined.push('\n');
                }
                combined.push_str(&stderr);
            }
            Err(ExecError::Failed {
                code,
                output: combined,
            })
        }
    }
}

impl Executor for CommandRunner {
    async fn run(&self, tokens: &[String]) -> Result<CommandOutput> {
        let ticker = ProgressTicker::start(&tokens.join(" "));
        // startとstopの間に早期リターンを置かないこと。
        // 失敗時もスピナーを止めてから結果を返す。
        let result = Self::spawn_and_wait(tokens).await;
        ticker.stop().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    /// 正常終了したコマンドの標準出力が得られることを確認
    #[tokio::test]
    async fn test_run_success() {
        let output = CommandRunner
            .run(&tokens(&["echo", "hello"]))
            .await
            .expect("echo should succeed");
        assert!(output.stdout.contains("hello"));
    }

    /// 非ゼロ終了が終了コードと出力つきのエラーになることを確認
    #[tokio::test]
    async fn test_run_nonzero_exit() {
        let result = CommandRunner
            .run(&tokens(&["sh", "-c", "echo boom >&2; exit 3"]))
            .await;
        match result {
            Err(ExecError::Failed { code, output }) => {
                assert_eq!(code, 3);
                assert!(output.contains("boom"));
            }
            other => panic!("expected Failed, got {:?}", other.map(|o| o.stdout)),
        }
    }

    /// 空のトークン列はエラーになることを確認
    #[tokio::test]
    async fn test_run_empty_tokens() {
        let result = CommandRunner.run(&[]).await;
        assert!(matches!(result, Err(ExecError::Empty)));
    }

    /// 存在しないコマンドは起動エラーになることを確認
    #[tokio::test]
    async fn test_run_missing_program() {
        let result = CommandRunner
            .run(&tokens(&["forgeflow-no-such-binary"]))
            .await;
        assert!(matches!(result, Err(ExecError::Spawn(_))));
    }
}
