//! Ctrl+C（SIGINT）による割り込みを検知する Outbound ポート
//!
//! 対話ループは毎周この trait を見て、true なら飛んでいる solve を待たずに終了する。

pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
