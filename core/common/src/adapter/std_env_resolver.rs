//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

/// 変数の取得関数からホームディレクトリを決める（空文字は未設定扱い）
fn resolve_home_dir_with(lookup: impl Fn(&str) -> Option<String>) -> Result<HomeDir, Error> {
    let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

    if let Some(home) = get("LAB_HOME") {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }

    let config_base = get("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| get("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(HomeDir::new(config_base.join("lab")))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        resolve_home_dir_with(|key| env::var(key).ok())
    }
}
