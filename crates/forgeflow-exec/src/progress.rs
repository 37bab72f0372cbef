//! 実行中コマンドのプログレススピナー
//!
//! 500msごとにフレームを進めるtokioタスクとして動作し、
//! 停止シグナル（oneshot）を受けたら次のtick以内に描画を消して終了します。

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// スピナーのフレーム間隔
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// 実行中表示のハンドル
///
/// `start` で起動し、`stop` で停止する。停止後にフレームが描画されることはなく、
/// 残った表示はクリアされる。1コマンド実行につき1つだけ使う。
pub struct ProgressTicker {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ProgressTicker {
    /// スピナーを起動してメッセージを表示
    pub fn start(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    // 停止シグナルを優先して、1tick以内に終了を観測する
                    biased;
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => spinner.tick(),
                }
            }
            spinner.finish_and_clear();
        });

        Self { stop_tx, task }
    }

    /// スピナーを停止し、描画タスクの終了を待つ
    pub async fn stop(self) {
        // タスクが既に終わっていてもsend失敗は無害
        let _ = self.stop_tx.send(());
        let _ = self.task.await;
    }
}
