use std::sync::Arc;

use crate::cli::Config;
use crate::ports::inbound::RunLab;
use crate::wiring::App;
use common::adapter::NoopLog;
use common::domain::ProviderName;

/// ホーム・設定ファイルなしの App で Runner を作る（テスト用の入口）
fn runner() -> crate::Runner {
    crate::Runner {
        app: App {
            logger: Arc::new(NoopLog),
            home: None,
            profiles: None,
        },
    }
}

#[test]
fn test_run_with_help() {
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(runner().run(config).unwrap(), 0);
}

#[test]
fn test_run_list_profiles() {
    let config = Config {
        list_profiles: true,
        ..Default::default()
    };
    assert_eq!(runner().run(config).unwrap(), 0);
}

#[test]
fn test_run_with_unknown_profile_is_usage_error() {
    let config = Config {
        profile: Some(ProviderName::new("nope")),
        ..Default::default()
    };
    let err = runner().run(config).unwrap_err();
    assert!(err.to_string().contains("Unknown provider: 'nope'"));
    assert_eq!(err.exit_code(), 64);
}
