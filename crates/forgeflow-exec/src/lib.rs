//! ForgeFlow exec — 外部コマンド実行とプログレス表示
//!
//! ビルドツールやマニフェストツールの呼び出しは全てここを通ります。
//! 1回の呼び出しにつき1つのスピナーを起動し、成功・失敗どちらの経路でも
//! 確実に停止してから結果を返します。

pub mod error;
pub mod progress;
pub mod runner;

pub use error::{ExecError, Result};
pub use progress::ProgressTicker;
pub use runner::{CommandOutput, CommandRunner, Executor};
