//! ユーザーが入力した課題文

/// 空白だけではない課題文（送信時はそのままの文字列を埋め込む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemText(String);

impl ProblemText {
    /// 前後の空白を除いて空なら None
    pub fn new(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }
}

impl std::ops::Deref for ProblemText {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ProblemText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_rejected() {
        assert!(ProblemText::new("").is_none());
        assert!(ProblemText::new("   \t\n").is_none());
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let p = ProblemText::new("  reduce food waste ").unwrap();
        assert_eq!(&*p, "  reduce food waste ");
    }
}
