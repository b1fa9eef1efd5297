//! ソルバー応答の検証と正規化
//!
//! モデルの応答は信頼しない。スキーマどおりの型に読めなければ SolveError とし、
//! 検証済みの値だけを AnalysisResult にして返す。

use super::error::SolveError;
use super::problem::ProblemText;
use super::solution::{AnalysisResult, Score, Solution};
use super::technique::Technique;
use common::llm::text::strip_code_fence;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRaw {
    technique_id: String,
    analysis: String,
    solutions: Vec<SolutionRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolutionRaw {
    title: String,
    text: String,
    emoji: String,
    category: String,
    impact: f64,
    feasibility: f64,
    next_step: String,
}

/// スコアを丸めた記録（ログ用）
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedScore {
    /// solutions 内の位置
    pub index: usize,
    /// "impact" / "feasibility"
    pub field: &'static str,
    pub raw: f64,
    pub value: Score,
}

/// 正規化済みの応答
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReply {
    pub result: AnalysisResult,
    /// モデルが返した手法 ID（そのまま）
    pub raw_technique_id: String,
    /// false のときはフォールバック手法に置き換えた
    pub technique_matched: bool,
    pub clamped: Vec<ClampedScore>,
}

/// 応答テキストを検証して AnalysisResult に正規化する
pub fn normalize_reply(problem: &ProblemText, text: &str) -> Result<NormalizedReply, SolveError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(SolveError::new("empty response"));
    }
    let raw: ReplyRaw = serde_json::from_str(body)
        .map_err(|e| SolveError::new(format!("response does not match schema: {}", e)))?;

    let resolution = Technique::resolve(&raw.technique_id);
    let mut clamped = Vec::new();
    let mut score = |index: usize, field: &'static str, raw: f64| {
        let (value, changed) = Score::clamped(raw);
        if changed {
            clamped.push(ClampedScore {
                index,
                field,
                raw,
                value,
            });
        }
        value
    };

    let solutions = raw
        .solutions
        .into_iter()
        .enumerate()
        .map(|(i, s)| Solution {
            impact: score(i, "impact", s.impact),
            feasibility: score(i, "feasibility", s.feasibility),
            title: s.title,
            text: s.text,
            emoji: s.emoji,
            category: s.category,
            next_step: s.next_step,
        })
        .collect();

    Ok(NormalizedReply {
        result: AnalysisResult {
            problem: problem.to_string(),
            technique: resolution.technique,
            analysis: raw.analysis,
            solutions,
        },
        raw_technique_id: raw.technique_id,
        technique_matched: resolution.matched,
        clamped,
    })
}
