//! ForgeFlow registry — コンテナレジストリのタグ一覧クライアント
//!
//! レジストリのタグ一覧APIを叩き、各エントリをマニフェストか
//! アーキテクチャ別コンテナイメージかに分類します。
//! タグ一覧はキャッシュせず、判断のたびに取り直します。
//! レジストリ自体が唯一の永続状態です。

pub mod client;
pub mod error;
pub mod model;

pub use client::{RegistryClient, TagSource};
pub use error::{RegistryError, Result};
pub use model::{EntryKind, ImageRecord, TagEntry, TagPage};
