//! セッション状態と純粋な状態遷移
//!
//! `reduce(state, event, now_ms)` は副作用を持たず、外界への要求は Effect として返す。
//! Effect の実行（ソルバー呼び出し・クリップボード書き込み）は usecase::SessionController が行う。

use super::category::{categories, filter, CategoryFilter, FavoriteSet};
use super::error::SolveError;
use super::export::{format_all, format_solution};
use super::i18n::{examples, strings};
use super::language::Language;
use super::loading::LoadingTicker;
use super::notification::{NotificationQueue, Severity};
use super::problem::ProblemText;
use super::solution::{AnalysisResult, Solution};

/// 表示中の結果と、その結果にだけ意味を持つ派生状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub result: AnalysisResult,
    pub favorites: FavoriteSet,
    pub active: CategoryFilter,
}

impl ResultView {
    /// 新しい結果はお気に入りなし・「すべて」から始まる
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            result,
            favorites: FavoriteSet::new(),
            active: CategoryFilter::All,
        }
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        categories(&self.result.solutions, &self.favorites)
    }

    /// 現在の絞り込みで見える解決案（元の添字付き）
    pub fn visible(&self) -> Vec<(usize, &Solution)> {
        filter(&self.result.solutions, &self.favorites, &self.active)
    }

    fn toggle_favorite(&mut self, index: usize) -> bool {
        if index >= self.result.solutions.len() {
            return false;
        }
        if !self.favorites.remove(&index) {
            self.favorites.insert(index);
        }
        true
    }

    fn select(&mut self, category: CategoryFilter) -> bool {
        if !self.categories().contains(&category) {
            return false;
        }
        self.active = category;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        problem: ProblemText,
        ticker: LoadingTicker,
        /// 再実行中でも失敗時に戻れるよう前の結果を持っておく
        previous: Option<ResultView>,
    },
    Ready(ResultView),
}

/// 状態の種類だけを表す（ログ・テスト用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Ready,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub language: Language,
    /// 入力欄の内容
    pub input: String,
    pub phase: Phase,
    pub notifications: NotificationQueue,
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Idle => Status::Idle,
            Phase::Loading { .. } => Status::Loading,
            Phase::Ready(_) => Status::Ready,
        }
    }

    /// Ready のときだけ結果を返す
    pub fn view(&self) -> Option<&ResultView> {
        match &self.phase {
            Phase::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.view().map(|v| &v.result)
    }

    fn view_mut(&mut self) -> Option<&mut ResultView> {
        match &mut self.phase {
            Phase::Ready(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    InputChanged(String),
    /// example が Some なら入力例をそのまま送信する（入力欄にも書き込む）
    Submit { example: Option<usize> },
    SolveSucceeded(AnalysisResult),
    SolveFailed(SolveError),
    ToggleFavorite(usize),
    SelectCategory(CategoryFilter),
    ToggleLanguage,
    CopySolution(usize),
    CopyAll,
    NewChallenge,
    Tick,
}

/// reduce が外界に要求する処理
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Solve {
        problem: ProblemText,
        language: Language,
    },
    CopyToClipboard(String),
}

/// 状態遷移。どのイベントでも先に期限切れの通知を取り除く。
pub fn reduce(mut state: SessionState, event: SessionEvent, now_ms: u64) -> (SessionState, Vec<Effect>) {
    state.notifications.expire(now_ms);
    let mut effects = Vec::new();
    let t = strings(state.language);

    match event {
        SessionEvent::InputChanged(text) => state.input = text,
        SessionEvent::Submit { example } => {
            if state.status() == Status::Loading {
                return (state, effects);
            }
            if let Some(i) = example {
                match examples(state.language).get(i) {
                    Some(ex) => state.input = ex.text.to_string(),
                    None => return (state, effects),
                }
            }
            match ProblemText::new(state.input.clone()) {
                None => {
                    state.notifications.push(t.input_error, Severity::Info, now_ms);
                }
                Some(problem) => {
                    let previous = match std::mem::replace(&mut state.phase, Phase::Idle) {
                        Phase::Ready(view) => Some(view),
                        _ => None,
                    };
                    effects.push(Effect::Solve {
                        problem: problem.clone(),
                        language: state.language,
                    });
                    state.phase = Phase::Loading {
                        problem,
                        ticker: LoadingTicker::start(now_ms),
                        previous,
                    };
                }
            }
        }
        SessionEvent::SolveSucceeded(result) => {
            if state.status() == Status::Loading {
                state.phase = Phase::Ready(ResultView::new(result));
            }
        }
        SessionEvent::SolveFailed(_) => {
            if state.status() == Status::Loading {
                if let Phase::Loading { previous, .. } = std::mem::replace(&mut state.phase, Phase::Idle) {
                    state.phase = previous.map(Phase::Ready).unwrap_or(Phase::Idle);
                }
                state.notifications.push(t.error, Severity::Error, now_ms);
            }
        }
        SessionEvent::ToggleFavorite(index) => {
            if let Some(view) = state.view_mut() {
                view.toggle_favorite(index);
            }
        }
        SessionEvent::SelectCategory(category) => {
            if let Some(view) = state.view_mut() {
                view.select(category);
            }
        }
        SessionEvent::ToggleLanguage => {
            state.language = state.language.toggled();
            match &mut state.phase {
                Phase::Ready(view) => view.active = CategoryFilter::All,
                Phase::Loading {
                    previous: Some(view),
                    ..
                } => view.active = CategoryFilter::All,
                _ => {}
            }
        }
        SessionEvent::CopySolution(index) => {
            let text = state
                .view()
                .and_then(|v| v.result.solutions.get(index))
                .map(|s| format_solution(s, state.language));
            if let Some(text) = text {
                effects.push(Effect::CopyToClipboard(text));
                state.notifications.push(t.copy_success, Severity::Success, now_ms);
            }
        }
        SessionEvent::CopyAll => {
            if let Some(view) = state.view() {
                effects.push(Effect::CopyToClipboard(format_all(&view.result.solutions)));
                state.notifications.push(t.copy_all_success, Severity::Success, now_ms);
            }
        }
        SessionEvent::NewChallenge => {
            if state.status() == Status::Ready {
                state.phase = Phase::Idle;
            }
        }
        SessionEvent::Tick => {}
    }
    (state, effects)
}
