//! コマンドハンドラ

pub mod manifest;
pub mod release;
