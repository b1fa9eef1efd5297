//! テスト用: ネットワークを使わない Solver 実装

use std::sync::Mutex;
use std::time::Duration;

use crate::domain::reply::normalize_reply;
use crate::domain::{
    AnalysisResult, Language, ProblemText, Score, Solution, SolveError, Technique, TechniqueId,
};
use crate::ports::outbound::Solver;

enum Behavior {
    /// 固定の手法とカテゴリ列から結果を組み立てる
    Fixed(TechniqueId, Vec<String>),
    /// モデル応答の本文として検証・正規化する
    Reply(String),
    Fail(String),
}

/// 呼び出された課題文を記録する Stub
pub struct StubSolver {
    behavior: Behavior,
    /// Some(n) なら n 回目より後の呼び出しは失敗する
    fail_after: Option<usize>,
    /// 応答前に待つ時間（遅い API の代わり）
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl StubSolver {
    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            fail_after: None,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing_after(mut self, successes: usize) -> Self {
        self.fail_after = Some(successes);
        self
    }

    /// カテゴリごとに1件、タイトル "<category>-title" の解決案を返す
    pub fn succeeding(technique: TechniqueId, categories: &[&str]) -> Self {
        Self::with(Behavior::Fixed(
            technique,
            categories.iter().map(|c| c.to_string()).collect(),
        ))
    }

    pub fn replying(json: &str) -> Self {
        Self::with(Behavior::Reply(json.to_string()))
    }

    pub fn failing(detail: &str) -> Self {
        Self::with(Behavior::Fail(detail.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Solver for StubSolver {
    fn solve(&self, problem: &ProblemText, _language: Language) -> Result<AnalysisResult, SolveError> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(problem.to_string());
            calls.len()
        };
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.fail_after.is_some_and(|n| count > n) {
            return Err(SolveError::new("stub exhausted"));
        }
        match &self.behavior {
            Behavior::Fixed(id, categories) => Ok(AnalysisResult {
                problem: problem.to_string(),
                technique: Technique::get(*id),
                analysis: "stub analysis".to_string(),
                solutions: categories
                    .iter()
                    .map(|c| Solution {
                        title: format!("{}-title", c),
                        text: format!("{}-text", c),
                        emoji: "💡".to_string(),
                        category: c.clone(),
                        impact: Score::new(8).unwrap(),
                        feasibility: Score::new(6).unwrap(),
                        next_step: format!("{}-next", c),
                    })
                    .collect(),
            }),
            Behavior::Reply(json) => normalize_reply(problem, json).map(|n| n.result),
            Behavior::Fail(detail) => Err(SolveError::new(detail.clone())),
        }
    }
}
