//! ForgeFlow manifest — マルチアーキテクチャマニフェストの差分検出と整備
//!
//! レジストリのタグ一覧を突き合わせて、統合マニフェストが欠けている
//! バージョンを洗い出し（[`diff`]）、マニフェストツールで作成・プッシュ
//! します（[`ManifestReconciler`]）。

pub mod diff;
pub mod reconciler;

pub use diff::{Reconciliation, diff};
pub use reconciler::ManifestReconciler;
