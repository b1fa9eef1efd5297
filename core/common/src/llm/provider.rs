//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 構造化出力の生成条件
///
/// プロンプト本文とは別に、応答スキーマと思考予算をプロバイダへ渡す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    /// 応答が従うべき JSON スキーマ（None のときは自由テキスト）
    pub response_schema: Option<Value>,
    /// 推論（thinking）に使うトークン予算
    pub thinking_budget: Option<u32>,
}

impl GenerationConfig {
    /// JSON スキーマ制約付きの設定
    pub fn structured(schema: Value, thinking_budget: Option<u32>) -> Self {
        Self {
            response_schema: Some(schema),
            thinking_budget,
        }
    }
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echo）はこのトレイトを実装する必要があります。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - 送信するプロンプト全文
    /// * `config` - 応答スキーマ・思考予算
    fn make_request_payload(&self, prompt: &str, config: &GenerationConfig) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信失敗・HTTP エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
