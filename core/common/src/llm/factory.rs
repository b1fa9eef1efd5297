//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::{GenerationConfig, LlmProvider};
use crate::llm::resolver::ResolvedProvider;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Gemini
    Gemini,
    /// Echo（API を呼ばずにダミー応答を返す）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Gemini(GeminiProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, prompt: &str, config: &GenerationConfig) -> Result<Value, Error> {
        match self {
            Self::Gemini(p) => p.make_request_payload(prompt, config),
            Self::Echo(p) => p.make_request_payload(prompt, config),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gemini(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gemini(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（オプション、デフォルト値が使用される）
/// * `base_url` - ベース URL（Gemini 用。None のときデフォルト）
/// * `api_key_env` - API キーを読む環境変数名（Gemini 用。None のとき GEMINI_API_KEY）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
) -> AnyProvider {
    match provider_type {
        ProviderType::Gemini => AnyProvider::Gemini(GeminiProvider::new(model, api_key_env, base_url)),
        ProviderType::Echo => AnyProvider::Echo(EchoProvider::new()),
    }
}

/// 解決済みプロバイダからドライバーを作成する
pub fn create_driver(resolved: &ResolvedProvider) -> LlmDriver<AnyProvider> {
    let provider = create_provider(
        resolved.provider_type,
        resolved.model.clone(),
        resolved.base_url.clone(),
        resolved.api_key_env.clone(),
    );
    LlmDriver::new(provider)
}
