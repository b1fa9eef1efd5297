//! 配線: 設定を解決し、標準アダプタで SessionController を組み立てる
//!
//! 優先順位は CLI フラグ → profiles.json → 組み込みの既定値。
//! API キーはドライバー生成時（ここ）に一度だけ環境変数から読む。

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StderrLog};
use common::domain::HomeDir;
use common::error::Error;
use common::llm::config::ProfilesConfig;
use common::llm::resolver::list_profiles;
use common::llm::{create_driver, load_profiles_config, resolve_provider, ResolvedProvider};
use common::ports::outbound::{EnvResolver, Log, LogLevel, LogRecord};

use crate::cli::Config;
use crate::domain::prompt::DEFAULT_THINKING_BUDGET;
use crate::domain::Language;
use crate::ports::outbound::Clipboard;
use crate::usecase::{LlmSolver, SessionController};

/// 解決済みの実行設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub provider: ResolvedProvider,
    pub language: Language,
    pub thinking_budget: u32,
}

pub struct App {
    pub logger: Arc<dyn Log>,
    pub home: Option<HomeDir>,
    pub profiles: Option<ProfilesConfig>,
}

/// ログ出力先: --verbose なら stderr、ホームが解決できればファイル、どちらでもなければ捨てる
fn select_logger(verbose: bool, home: Option<&HomeDir>) -> Arc<dyn Log> {
    match (verbose, home) {
        (true, _) => Arc::new(StderrLog),
        (false, Some(h)) => Arc::new(FileJsonLog::new(h.log_path())),
        (false, None) => Arc::new(NoopLog),
    }
}

/// 標準アダプタで App を組み立てる。profiles.json が壊れていればエラー。
pub fn wire_lab(verbose: bool) -> Result<App, Error> {
    wire_lab_with(verbose, &StdEnvResolver)
}

pub fn wire_lab_with(verbose: bool, env: &dyn EnvResolver) -> Result<App, Error> {
    // ホームが無くても solve はできるので、設定ファイルとログファイルを諦めるだけにする
    let home = env.resolve_home_dir().ok();
    let logger = select_logger(verbose, home.as_ref());
    let profiles = match &home {
        Some(h) => load_profiles_config(&h.profiles_config_path())?,
        None => None,
    };
    let _ = logger.log(
        &LogRecord::new(LogLevel::Debug, "wired")
            .layer("wiring")
            .kind("config")
            .field("home", home.as_ref().map(|h| h.display().to_string()))
            .field("profiles_loaded", profiles.is_some()),
    );
    Ok(App {
        logger,
        home,
        profiles,
    })
}

impl App {
    pub fn list_profiles(&self) -> (Vec<String>, String) {
        list_profiles(self.profiles.as_ref())
    }

    /// フラグ・profiles.json・既定値から実行設定を決める
    pub fn resolve_settings(&self, config: &Config) -> Result<Settings, Error> {
        let mut provider = resolve_provider(config.profile.as_ref(), self.profiles.as_ref())?;
        if let Some(model) = &config.model {
            provider.model = Some(model.to_string());
        }
        let language = match config.language {
            Some(lang) => lang,
            None => match self.profiles.as_ref().and_then(|p| p.language.as_deref()) {
                Some(tag) => Language::parse(tag)?,
                None => Language::default(),
            },
        };
        let thinking_budget = config
            .thinking_budget
            .or(provider.thinking_budget)
            .unwrap_or(DEFAULT_THINKING_BUDGET);
        Ok(Settings {
            provider,
            language,
            thinking_budget,
        })
    }

    pub fn build_controller(&self, settings: &Settings, clipboard: Arc<dyn Clipboard>) -> SessionController {
        let driver = create_driver(&settings.provider);
        let solver = LlmSolver::new(driver, settings.thinking_budget, Arc::clone(&self.logger));
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "session configured")
                .layer("wiring")
                .kind("config")
                .field("profile", settings.provider.profile_name.as_str())
                .field("provider", settings.provider.provider_type.as_str())
                .field("model", settings.provider.model.clone())
                .field("language", settings.language.tag())
                .field("thinking_budget", settings.thinking_budget),
        );
        SessionController::new(
            settings.language,
            Arc::new(solver),
            clipboard,
            Arc::new(StdClock),
            Arc::clone(&self.logger),
        )
    }
}
