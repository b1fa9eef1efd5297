//! profiles.json の読み込みとプロバイダ解決

use crate::domain::ProviderName;
use crate::error::Error;
use crate::llm::config::{ProfilesConfig, ProviderTypeKind};
use crate::llm::factory::ProviderType;
use std::io::ErrorKind;
use std::path::Path;

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "work", "gemini"）。エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub thinking_budget: Option<u32>,
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(path: &Path) -> Result<Option<ProfilesConfig>, Error> {
    let contents = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io_msg(format!("{}: {}", path.display(), e))),
    };
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

fn provider_type_kind_to_provider_type(k: ProviderTypeKind) -> ProviderType {
    match k {
        ProviderTypeKind::Gemini => ProviderType::Gemini,
        ProviderTypeKind::Echo => ProviderType::Echo,
    }
}

/// 利用可能なビルトインプロバイダ名
pub fn builtin_provider_names() -> &'static [&'static str] {
    &["gemini", "echo"]
}

/// 利用可能なプロファイル名一覧（ビルトイン + profiles.json、ソート済み）と既定名を返す
pub fn list_profiles(cfg: Option<&ProfilesConfig>) -> (Vec<String>, String) {
    let mut names: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for k in cfg.providers.keys() {
            if !names.contains(k) {
                names.push(k.clone());
            }
        }
    }
    names.sort();
    let default = cfg
        .and_then(|c| c.default_provider.clone())
        .unwrap_or_else(|| "gemini".to_string());
    (names, default)
}

/// 要求されたプロバイダ名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロバイダの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.map(|r| r.as_ref()).unwrap_or_else(|| {
        cfg.and_then(|c| c.default_provider.as_deref())
            .unwrap_or("gemini")
    });

    // 1) cfg.providers に名前があればそれを優先
    if let Some(cfg) = cfg {
        if let Some(profile) = cfg.providers.get(effective_name) {
            return Ok(ResolvedProvider {
                profile_name: effective_name.to_string(),
                provider_type: provider_type_kind_to_provider_type(profile.type_),
                base_url: profile.base_url.clone(),
                model: profile.model.clone(),
                api_key_env: profile.api_key_env.clone(),
                thinking_budget: profile.thinking_budget,
            });
        }
    }

    // 2) ビルトイン (ProviderType::from_str) を試す
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            thinking_budget: None,
        });
    }

    // 3) どれも無ければ usage エラー
    let (available, _) = list_profiles(cfg);
    Err(Error::invalid_argument(format!(
        "Unknown provider: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::config::ProviderProfile;
    use std::collections::HashMap;

    fn profile(type_: ProviderTypeKind, model: Option<&str>) -> ProviderProfile {
        ProviderProfile {
            type_,
            base_url: None,
            model: model.map(String::from),
            api_key_env: None,
            thinking_budget: None,
        }
    }

    #[test]
    fn test_resolve_provider_no_cfg_requested_none() {
        let r = resolve_provider(None, None).unwrap();
        assert_eq!(r.profile_name, "gemini");
        assert_eq!(r.provider_type, ProviderType::Gemini);
        assert!(r.model.is_none());
    }

    #[test]
    fn test_resolve_provider_no_cfg_requested_echo() {
        let name = ProviderName::new("echo");
        let r = resolve_provider(Some(&name), None).unwrap();
        assert_eq!(r.provider_type, ProviderType::Echo);
    }

    #[test]
    fn test_resolve_provider_no_cfg_unknown() {
        let name = ProviderName::new("unknown_provider");
        let e = resolve_provider(Some(&name), None).unwrap_err();
        assert!(e.is_usage());
        assert!(e.to_string().contains("Unknown provider"));
        assert!(e.to_string().contains("unknown_provider"));
        assert!(e.to_string().contains("Available"));
    }

    #[test]
    fn test_resolve_provider_cfg_default_provider() {
        let mut providers = HashMap::new();
        providers.insert(
            "work".to_string(),
            ProviderProfile {
                type_: ProviderTypeKind::Gemini,
                base_url: Some("https://proxy.example/v1beta".to_string()),
                model: Some("gemini-2.5-pro".to_string()),
                api_key_env: Some("WORK_KEY".to_string()),
                thinking_budget: Some(2048),
            },
        );
        let cfg = ProfilesConfig {
            default_provider: Some("work".to_string()),
            language: None,
            providers,
        };
        let r = resolve_provider(None, Some(&cfg)).unwrap();
        assert_eq!(r.profile_name, "work");
        assert_eq!(r.provider_type, ProviderType::Gemini);
        assert_eq!(r.base_url.as_deref(), Some("https://proxy.example/v1beta"));
        assert_eq!(r.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(r.api_key_env.as_deref(), Some("WORK_KEY"));
        assert_eq!(r.thinking_budget, Some(2048));
    }

    #[test]
    fn test_resolve_provider_cfg_requested_overrides_default() {
        let cfg = ProfilesConfig {
            default_provider: Some("gemini".to_string()),
            language: None,
            providers: HashMap::new(),
        };
        let name = ProviderName::new("echo");
        let r = resolve_provider(Some(&name), Some(&cfg)).unwrap();
        assert_eq!(r.provider_type, ProviderType::Echo);
    }

    #[test]
    fn test_resolve_provider_cfg_unknown_provider_lists_available() {
        let mut providers = HashMap::new();
        providers.insert("my_custom".to_string(), profile(ProviderTypeKind::Echo, None));
        let cfg = ProfilesConfig {
            default_provider: None,
            language: None,
            providers,
        };
        let name = ProviderName::new("nonexistent");
        let e = resolve_provider(Some(&name), Some(&cfg)).unwrap_err();
        assert!(e.is_usage());
        let msg = e.to_string();
        assert!(msg.contains("nonexistent"));
        assert!(msg.contains("my_custom"));
        assert!(msg.contains("gemini"));
    }

    #[test]
    fn test_list_profiles_merges_and_sorts() {
        let mut providers = HashMap::new();
        providers.insert("work".to_string(), profile(ProviderTypeKind::Gemini, Some("m")));
        providers.insert("echo".to_string(), profile(ProviderTypeKind::Echo, None));
        let cfg = ProfilesConfig {
            default_provider: Some("work".to_string()),
            language: None,
            providers,
        };
        let (names, default) = list_profiles(Some(&cfg));
        assert_eq!(names, vec!["echo", "gemini", "work"]);
        assert_eq!(default, "work");
    }

    #[test]
    fn test_load_profiles_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = load_profiles_config(&dir.path().join("profiles.json")).unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn test_load_profiles_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, r#"{"default_provider":"echo","language":"en"}"#).unwrap();
        let cfg = load_profiles_config(&path).unwrap().unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("echo"));
        assert_eq!(cfg.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_load_profiles_config_broken_json_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "{ not json").unwrap();
        let e = load_profiles_config(&path).unwrap_err();
        assert!(matches!(e, Error::Json(_)));
        assert!(e.to_string().contains("profiles.json"));
    }
}
