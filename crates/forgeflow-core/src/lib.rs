//! ForgeFlow core — 設定とタグ合成
//!
//! 旧スクリプトがグローバル定数として持っていたリポジトリ名・API URL・
//! デフォルトアーキテクチャ一覧を、注入可能な [`Config`] に集約します。
//! 各クレートは `Config` を受け取るだけで、プロセス全体の固定状態を持ちません。

pub mod config;
pub mod tag;

pub use config::Config;
pub use tag::{image_tag, split_tag};
