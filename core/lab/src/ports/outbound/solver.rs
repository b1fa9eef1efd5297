//! 課題を解く Outbound ポート
//!
//! 1 回の呼び出しで外部の生成 API に 1 回だけ問い合わせる。再試行はしない。

use crate::domain::{AnalysisResult, Language, ProblemText, SolveError};

/// 課題文から分析結果を得る
///
/// 実装は usecase::LlmSolver（LLM 経由）、テストではスタブ。
pub trait Solver: Send + Sync {
    fn solve(&self, problem: &ProblemText, language: Language) -> Result<AnalysisResult, SolveError>;
}
