//! ソルバーの失敗を表す単一のエラー種別
//!
//! 通信失敗・応答の形式不一致・空応答を区別せず呼び出し側に返す。
//! 詳細はログにだけ残す。

use common::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("solve failed: {detail}")]
pub struct SolveError {
    detail: String,
}

impl SolveError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// ログ用の詳細
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<Error> for SolveError {
    fn from(e: Error) -> Self {
        Self::new(e.to_string())
    }
}
