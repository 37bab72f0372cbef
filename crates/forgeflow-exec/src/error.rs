//! 外部コマンド実行のエラー型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("空のコマンドは実行できません")]
    Empty,

    #[error("コマンドの起動に失敗しました: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("コマンドが終了コード {code} で失敗しました:\n{output}")]
    Failed { code: i32, output: String },
}

pub type Result<T> = std::result::Result<T, ExecError>;
