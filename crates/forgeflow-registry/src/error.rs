//! レジストリAPIのエラー型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("レジストリAPIへのリクエストに失敗しました: {0}")]
    Http(#[from] reqwest::Error),

    #[error("レジストリAPIが {status} を返しました: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("タグ一覧のデコードに失敗しました: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
