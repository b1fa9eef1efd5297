//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ（設定・ログの置き場）を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. LAB_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/lab（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/lab
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;
}
