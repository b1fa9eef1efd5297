//! LLM を使う Solver 実装
//!
//! プロンプト組み立て → 1 回だけ生成 → 応答の検証・正規化。
//! 失敗の詳細はログに残し、呼び出し側には SolveError だけを返す。

use std::sync::Arc;

use common::llm::{GenerationConfig, LlmDriver, LlmProvider};
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::prompt::{build_prompt, response_schema};
use crate::domain::reply::normalize_reply;
use crate::domain::{AnalysisResult, Language, ProblemText, SolveError};
use crate::ports::outbound::Solver;

pub struct LlmSolver<P: LlmProvider> {
    driver: LlmDriver<P>,
    thinking_budget: u32,
    logger: Arc<dyn Log>,
}

impl<P: LlmProvider> LlmSolver<P> {
    pub fn new(driver: LlmDriver<P>, thinking_budget: u32, logger: Arc<dyn Log>) -> Self {
        Self {
            driver,
            thinking_budget,
            logger,
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase").kind("solve"));
    }

    fn fail(&self, problem: &ProblemText, e: SolveError) -> SolveError {
        self.log(
            LogRecord::new(LogLevel::Error, "solve failed")
                .field("provider", self.driver.provider().name())
                .field("problem_chars", problem.chars().count())
                .field("detail", e.detail()),
        );
        e
    }
}

impl<P: LlmProvider> Solver for LlmSolver<P> {
    fn solve(&self, problem: &ProblemText, language: Language) -> Result<AnalysisResult, SolveError> {
        self.log(
            LogRecord::new(LogLevel::Info, "solve started")
                .field("provider", self.driver.provider().name())
                .field("language", language.tag())
                .field("thinking_budget", self.thinking_budget),
        );

        let prompt = build_prompt(problem, language);
        let config = GenerationConfig::structured(response_schema(), Some(self.thinking_budget));
        let text = self
            .driver
            .generate(&prompt, &config)
            .map_err(|e| self.fail(problem, SolveError::from(e)))?;
        let reply = normalize_reply(problem, &text).map_err(|e| self.fail(problem, e))?;

        if !reply.technique_matched {
            self.log(
                LogRecord::new(LogLevel::Warn, "unknown technique, using fallback")
                    .field("returned", reply.raw_technique_id.as_str())
                    .field("fallback", reply.result.technique.id.as_str()),
            );
        }
        for c in &reply.clamped {
            self.log(
                LogRecord::new(LogLevel::Warn, "score clamped")
                    .field("index", c.index)
                    .field("field", c.field)
                    .field("raw", c.raw)
                    .field("value", c.value.get()),
            );
        }
        self.log(
            LogRecord::new(LogLevel::Info, "solve succeeded")
                .field("technique", reply.result.technique.id.as_str())
                .field("solutions", reply.result.solutions.len()),
        );
        Ok(reply.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryLog;
    use crate::domain::TechniqueId;
    use common::error::Error;
    use common::llm::echo::EchoProvider;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// 固定の応答本文を返し、受け取ったペイロードを記録するプロバイダ
    struct CannedProvider {
        reply: Result<&'static str, &'static str>,
        seen: Mutex<Option<Value>>,
    }

    impl CannedProvider {
        fn ok(text: &'static str) -> Self {
            Self {
                reply: Ok(text),
                seen: Mutex::new(None),
            }
        }

        fn failing(msg: &'static str) -> Self {
            Self {
                reply: Err(msg),
                seen: Mutex::new(None),
            }
        }
    }

    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn make_request_payload(&self, prompt: &str, config: &GenerationConfig) -> Result<Value, Error> {
            let v = json!({ "prompt": prompt, "budget": config.thinking_budget, "schema": config.response_schema });
            *self.seen.lock().unwrap() = Some(v.clone());
            Ok(v)
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(msg) => Err(Error::http(msg)),
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            Ok(Some(response_json.to_string()))
        }
    }

    const GOOD: &str = r#"{"techniqueId":"first_principles","analysis":"a","solutions":[
        {"title":"t","text":"x","emoji":"🔥","category":"C","impact":14,"feasibility":3,"nextStep":"n"}]}"#;

    fn solver<P: LlmProvider>(p: P, log: Arc<MemoryLog>) -> LlmSolver<P> {
        LlmSolver::new(LlmDriver::new(p), 4000, log)
    }

    fn problem() -> ProblemText {
        ProblemText::new("reduce food waste").unwrap()
    }

    #[test]
    fn test_solve_sends_prompt_schema_and_budget() {
        let log = Arc::new(MemoryLog::new());
        let s = solver(CannedProvider::ok(GOOD), log);
        s.solve(&problem(), Language::En).unwrap();
        let seen = s.driver.provider().seen.lock().unwrap().clone().unwrap();
        assert!(seen["prompt"].as_str().unwrap().contains("reduce food waste"));
        assert_eq!(seen["budget"], json!(4000));
        assert_eq!(seen["schema"]["required"][0], "techniqueId");
    }

    #[test]
    fn test_solve_normalizes_and_logs_clamp() {
        let log = Arc::new(MemoryLog::new());
        let s = solver(CannedProvider::ok(GOOD), log.clone());
        let r = s.solve(&problem(), Language::En).unwrap();
        assert_eq!(r.technique.id, TechniqueId::FirstPrinciples);
        assert_eq!(r.solutions[0].impact.get(), 10);
        assert_eq!(r.solutions[0].feasibility.get(), 3);
        assert!(log.messages().contains(&"score clamped".to_string()));
        assert!(log.messages().contains(&"solve succeeded".to_string()));
    }

    #[test]
    fn test_transport_failure_becomes_solve_error_and_is_logged() {
        let log = Arc::new(MemoryLog::new());
        let s = solver(CannedProvider::failing("HTTP request failed: connection refused"), log.clone());
        let e = s.solve(&problem(), Language::Ar).unwrap_err();
        assert!(e.detail().contains("connection refused"));
        assert!(log.messages().contains(&"solve failed".to_string()));
    }

    #[test]
    fn test_schema_mismatch_fails_closed() {
        let log = Arc::new(MemoryLog::new());
        let s = solver(CannedProvider::ok(r#"{"analysis":"a"}"#), log);
        assert!(s.solve(&problem(), Language::En).is_err());
    }

    #[test]
    fn test_blank_model_text_is_solve_error() {
        let log = Arc::new(MemoryLog::new());
        let s = solver(CannedProvider::ok("   "), log);
        assert!(s.solve(&problem(), Language::En).is_err());
    }

    #[test]
    fn test_echo_provider_round_trip_uses_fallback() {
        let log = Arc::new(MemoryLog::new());
        let s = solver(EchoProvider::new(), log.clone());
        let r = s.solve(&problem(), Language::En).unwrap();
        assert_eq!(r.technique.id, TechniqueId::FiveWhys);
        assert_eq!(r.solutions.len(), 5);
        assert!(log
            .messages()
            .contains(&"unknown technique, using fallback".to_string()));
    }
}
