//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → 送信 → テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::{GenerationConfig, LlmProvider};

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにプロンプトを1回だけ送信して応答テキストを取得
    ///
    /// リトライはしない。空の応答はエラーとして扱う。
    pub fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt, config)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        let text = self
            .provider
            .parse_response_text(&response_json)?
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::http("No text in response"))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    // モックプロバイダ
    struct MockProvider {
        body: &'static str,
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(&self, prompt: &str, _config: &GenerationConfig) -> Result<Value, Error> {
            Ok(serde_json::json!({ "prompt": prompt }))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Ok(self.body.to_string())
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
            Ok(v["text"].as_str().map(|s| s.to_string()))
        }
    }

    // エラーハンドリングのテスト用モックプロバイダ
    struct HttpErrorProvider;

    impl LlmProvider for HttpErrorProvider {
        fn name(&self) -> &str {
            "error_mock"
        }

        fn make_request_payload(&self, _prompt: &str, _config: &GenerationConfig) -> Result<Value, Error> {
            Ok(serde_json::json!({}))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Err(Error::http("HTTP request failed"))
        }

        fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
            Ok(None)
        }
    }

    #[test]
    fn test_llm_driver_new() {
        let driver = LlmDriver::new(MockProvider { body: "{}" });
        assert_eq!(driver.provider().name(), "mock");
    }

    #[test]
    fn test_llm_driver_generate() {
        let driver = LlmDriver::new(MockProvider {
            body: r#"{"text":"Hello, world!"}"#,
        });
        let result = driver.generate("test", &GenerationConfig::default());
        assert_eq!(result.unwrap(), "Hello, world!");
    }

    #[test]
    fn test_llm_driver_generate_missing_text() {
        let driver = LlmDriver::new(MockProvider { body: "{}" });
        let err = driver.generate("test", &GenerationConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No text in response"));
    }

    #[test]
    fn test_llm_driver_generate_blank_text_is_error() {
        let driver = LlmDriver::new(MockProvider {
            body: r#"{"text":"   \n"}"#,
        });
        assert!(driver.generate("test", &GenerationConfig::default()).is_err());
    }

    #[test]
    fn test_llm_driver_generate_http_error() {
        let driver = LlmDriver::new(HttpErrorProvider);
        let err = driver.generate("test", &GenerationConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[test]
    fn test_llm_driver_generate_parse_error() {
        let driver = LlmDriver::new(MockProvider { body: "not json" });
        let err = driver.generate("test", &GenerationConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
