//! リリースAPIのエラー型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("リリースAPIへのリクエストに失敗しました: {0}")]
    Http(#[from] reqwest::Error),

    #[error("リリースAPIが {status} を返しました: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("リリース情報のデコードに失敗しました: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
