//! 解決案と分析結果

use super::technique::Technique;

/// 1〜10 のスコア（影響度・実現可能性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// 範囲内の値だけ受け付ける
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// 外部由来の数値を四捨五入して 1〜10 に丸める。
    ///
    /// 戻り値の bool は値を変更したか（範囲外・非整数・非有限）。
    pub fn clamped(raw: f64) -> (Self, bool) {
        if !raw.is_finite() {
            return (Self(Self::MIN), true);
        }
        let rounded = raw.round().clamp(Self::MIN as f64, Self::MAX as f64);
        let changed = rounded != raw;
        (Self(rounded as u8), changed)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// AI が生成した解決案1件（生成後は不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub title: String,
    pub text: String,
    pub emoji: String,
    pub category: String,
    pub impact: Score,
    pub feasibility: Score,
    pub next_step: String,
}

/// 1回の solve の結果一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub problem: String,
    pub technique: &'static Technique,
    pub analysis: String,
    pub solutions: Vec<Solution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_new_range() {
        assert!(Score::new(0).is_none());
        assert_eq!(Score::new(1).unwrap().get(), 1);
        assert_eq!(Score::new(10).unwrap().get(), 10);
        assert!(Score::new(11).is_none());
    }

    #[test]
    fn test_score_clamped_in_range_is_unchanged() {
        let (s, changed) = Score::clamped(7.0);
        assert_eq!(s.get(), 7);
        assert!(!changed);
    }

    #[test]
    fn test_score_clamped_out_of_range() {
        assert_eq!(Score::clamped(12.0), (Score(10), true));
        assert_eq!(Score::clamped(0.0), (Score(1), true));
        assert_eq!(Score::clamped(-3.0), (Score(1), true));
    }

    #[test]
    fn test_score_clamped_rounds_fractions() {
        assert_eq!(Score::clamped(7.6), (Score(8), true));
        assert_eq!(Score::clamped(9.4), (Score(9), true));
    }

    #[test]
    fn test_score_clamped_non_finite() {
        assert_eq!(Score::clamped(f64::NAN).0.get(), 1);
        assert!(Score::clamped(f64::INFINITY).1);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(8).unwrap().to_string(), "8/10");
    }
}
