//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase は ports の trait 経由でのみ時刻・環境変数・ログに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod std_clock;
pub mod std_env_resolver;

pub use file_json_log::{FileJsonLog, NoopLog, StderrLog};
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
