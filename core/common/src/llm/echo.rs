//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、応答スキーマからダミーの応答を組み立てるだけです。
//! デバッグやテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::{GenerationConfig, LlmProvider};
use serde_json::{json, Map, Value};

/// 配列スキーマに対して生成する要素数
const ECHO_ARRAY_LEN: usize = 5;

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

/// スキーマ（OBJECT / ARRAY / STRING / NUMBER / INTEGER / BOOLEAN）に沿ったダミー値を作る
///
/// 文字列にはプロパティ名と配列内の通し番号を入れる。
fn synthesize(schema: &Value, label: &str, ordinal: Option<usize>) -> Value {
    let ty = schema["type"].as_str().unwrap_or("STRING").to_ascii_uppercase();
    match ty.as_str() {
        "OBJECT" => {
            let mut obj = Map::new();
            if let Some(props) = schema["properties"].as_object() {
                for (key, sub) in props {
                    obj.insert(key.clone(), synthesize(sub, key, ordinal));
                }
            }
            Value::Object(obj)
        }
        "ARRAY" => Value::Array(
            (1..=ECHO_ARRAY_LEN)
                .map(|n| synthesize(&schema["items"], label, Some(n)))
                .collect(),
        ),
        "NUMBER" | "INTEGER" => json!(5),
        "BOOLEAN" => json!(false),
        _ => match ordinal {
            Some(n) => json!(format!("[echo] {} {}", label, n)),
            None => json!(format!("[echo] {}", label)),
        },
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, prompt: &str, config: &GenerationConfig) -> Result<Value, Error> {
        let mut payload = json!({ "prompt": prompt });
        if let Some(ref schema) = config.response_schema {
            payload["schema"] = schema.clone();
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let request: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;

        // スキーマがあればそれに沿った JSON、なければプロンプトをそのまま返す
        let text = match request.get("schema") {
            Some(schema) => synthesize(schema, "value", None).to_string(),
            None => request["prompt"].as_str().unwrap_or_default().to_string(),
        };

        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        });
        Ok(response.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string()))
    }
}
