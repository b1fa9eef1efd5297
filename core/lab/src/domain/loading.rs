//! ローディング表示の進行（工程ラベルと名言の切り替え）
//!
//! タイマーを持たず、開始時刻からの経過時間だけで表示位置を決める。
//! Loading 状態の中に置くので、状態を抜ければ何も残らない。

use super::i18n::{quotes, strings, Quote};
use super::language::Language;

/// 工程ラベルの切り替え間隔
pub const STEP_INTERVAL_MS: u64 = 2000;
/// 名言の切り替え間隔
pub const QUOTE_INTERVAL_MS: u64 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTicker {
    started_at_ms: u64,
    /// 名言の開始位置（時計から取った擬似乱数）
    quote_seed: u64,
}

impl LoadingTicker {
    pub fn start(now_ms: u64) -> Self {
        Self {
            started_at_ms: now_ms,
            quote_seed: now_ms / 7,
        }
    }

    fn elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    /// 工程の位置（0 始まり、len で循環）
    pub fn step_index(&self, now_ms: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.elapsed(now_ms) / STEP_INTERVAL_MS) % len as u64) as usize
    }

    /// 名言の位置（開始位置から len で循環）
    pub fn quote_index(&self, now_ms: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let ticks = self.elapsed(now_ms) / QUOTE_INTERVAL_MS;
        ((self.quote_seed.wrapping_add(ticks)) % len as u64) as usize
    }

    pub fn step_label(&self, now_ms: u64, lang: Language) -> &'static str {
        let steps = &strings(lang).loading_steps;
        steps[self.step_index(now_ms, steps.len())]
    }

    pub fn quote(&self, now_ms: u64, lang: Language) -> &'static Quote {
        let all = quotes(lang);
        &all[self.quote_index(now_ms, all.len())]
    }
}
