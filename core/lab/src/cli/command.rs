//! 対話プロンプトの1行を解釈する
//!
//! `:` で始まる行はコマンド、それ以外は課題文として送信する。番号は 1 始まりで受け取り、
//! ここで 0 始まりの添字に直す。

use crate::domain::{CategoryFilter, SessionEvent, SessionState};
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// 課題文を入力して送信
    Solve(String),
    Example(usize),
    Favorite(usize),
    /// 入力どおりの引数（解釈は表示中のカテゴリ一覧と突き合わせて行う）
    Category(String),
    Copy(usize),
    CopyAll,
    Lang,
    New,
    Help,
    Quit,
    /// 空行（画面を再描画するだけ）
    Empty,
}

impl ReplCommand {
    /// セッションに渡すイベント列。Help / Quit / Empty はイベントを持たない。
    pub fn events(&self, state: &SessionState) -> Vec<SessionEvent> {
        match self {
            Self::Solve(text) => vec![
                SessionEvent::InputChanged(text.clone()),
                SessionEvent::Submit { example: None },
            ],
            Self::Example(i) => vec![SessionEvent::Submit { example: Some(*i) }],
            Self::Favorite(i) => vec![SessionEvent::ToggleFavorite(*i)],
            Self::Category(arg) => {
                let offered = state.view().map(|v| v.categories()).unwrap_or_default();
                vec![SessionEvent::SelectCategory(CategoryFilter::from_arg(arg, &offered))]
            }
            Self::Copy(i) => vec![SessionEvent::CopySolution(*i)],
            Self::CopyAll => vec![SessionEvent::CopyAll],
            Self::Lang => vec![SessionEvent::ToggleLanguage],
            Self::New => vec![SessionEvent::NewChallenge],
            Self::Help | Self::Quit | Self::Empty => vec![],
        }
    }
}

fn index_arg(cmd: &str, arg: Option<&str>) -> Result<usize, Error> {
    let raw = arg.ok_or_else(|| Error::invalid_argument(format!(":{} needs a number", cmd)))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(Error::invalid_argument(format!(
            ":{} expects a number starting at 1, got '{}'",
            cmd, raw
        ))),
    }
}

pub fn parse_line(line: &str) -> Result<ReplCommand, Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ReplCommand::Empty);
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(ReplCommand::Solve(line.trim_end_matches(['\r', '\n']).to_string()));
    };
    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((c, a)) => (c, Some(a.trim()).filter(|a| !a.is_empty())),
        None => (rest, None),
    };
    match cmd {
        "ex" => Ok(ReplCommand::Example(index_arg(cmd, arg)?)),
        "fav" => Ok(ReplCommand::Favorite(index_arg(cmd, arg)?)),
        "copy" => Ok(ReplCommand::Copy(index_arg(cmd, arg)?)),
        "cat" => arg
            .map(|a| ReplCommand::Category(a.to_string()))
            .ok_or_else(|| Error::invalid_argument(":cat needs a category name, all or fav")),
        "copyall" => Ok(ReplCommand::CopyAll),
        "lang" => Ok(ReplCommand::Lang),
        "new" => Ok(ReplCommand::New),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        other => Err(Error::invalid_argument(format!(
            "Unknown command: ':{}'. Type :help",
            other
        ))),
    }
}
