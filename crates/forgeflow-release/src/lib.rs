//! ForgeFlow release — 上流リリースのバージョン解決
//!
//! 上流プロジェクトのリリースAPIから「最新1件」または「新しい順にN件」の
//! リリースタグを取得します。CLIで明示的にバージョンが渡された場合、
//! このクレートは一切使われません。

pub mod client;
pub mod error;
pub mod model;

pub use client::ReleaseClient;
pub use error::{ReleaseError, Result};
pub use model::Release;
