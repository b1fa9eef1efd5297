//! 表示言語（アラビア語 / 英語）

use common::error::Error;

/// UI とプロンプトの言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// アラビア語（右から左）
    #[default]
    Ar,
    /// 英語（左から右）
    En,
}

/// 文字の流れる向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    /// "ar" / "en"（大文字小文字・前後空白は無視）を解析する
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            other => Err(Error::invalid_argument(format!(
                "Unknown language: '{}'. Available: ar, en",
                other
            ))),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    /// もう一方の言語
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
