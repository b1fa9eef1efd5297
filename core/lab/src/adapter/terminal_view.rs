//! 端末向けの描画（状態 → テキスト）
//!
//! 状態を読むだけで変更しない。右から左の言語では各行の先頭に RLM を置き、
//! 端末の双方向テキスト処理に向きを伝える。

use crate::domain::i18n::{examples, strings};
use crate::domain::{Direction, Language, Notification, Phase, ResultView, SessionState, Severity};

const RLM: char = '\u{200F}';

fn line(out: &mut String, lang: Language, text: &str) {
    if lang.direction() == Direction::Rtl && !text.is_empty() {
        out.push(RLM);
    }
    out.push_str(text);
    out.push('\n');
}

fn severity_mark(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✔",
        Severity::Error => "✖",
        Severity::Info => "ℹ",
    }
}

pub fn render_notifications(notifications: &[Notification], lang: Language) -> String {
    let mut out = String::new();
    for n in notifications {
        line(&mut out, lang, &format!("{} {}", severity_mark(n.severity), n.message));
    }
    out
}

/// 解析中に届いた入力を断る1行
pub fn render_busy(lang: Language) -> String {
    let mut out = String::new();
    line(&mut out, lang, &format!("{} {}", severity_mark(Severity::Info), strings(lang).busy));
    out
}

fn render_idle(out: &mut String, lang: Language) {
    let t = strings(lang);
    line(out, lang, &format!("✨ {}", t.title));
    line(out, lang, t.subtitle);
    line(out, lang, "");
    line(out, lang, t.placeholder);
    line(out, lang, "");
    line(out, lang, t.examples_title);
    for (i, ex) in examples(lang).iter().enumerate() {
        line(out, lang, &format!("  :ex {}  {} {}", i + 1, ex.icon, ex.text));
    }
    line(out, lang, "");
    line(out, lang, &format!(":lang  {}    :help", t.switch_language));
}

/// Loading 中の1フレーム（工程と名言）
pub fn render_loading(state: &SessionState, now_ms: u64) -> String {
    let mut out = String::new();
    let lang = state.language;
    if let Phase::Loading { problem, ticker, .. } = &state.phase {
        let steps = &strings(lang).loading_steps;
        let current = ticker.step_index(now_ms, steps.len());
        let dots: String = (0..steps.len())
            .map(|i| if i == current { '●' } else { '·' })
            .collect();
        line(&mut out, lang, &format!("⏳ {}", &**problem));
        line(&mut out, lang, &format!("{} {}", dots, ticker.step_label(now_ms, lang)));
        let quote = ticker.quote(now_ms, lang);
        line(&mut out, lang, &format!("\"{}\" — {}", quote.text, quote.author));
    }
    out
}

fn category_bar(view: &ResultView, lang: Language) -> String {
    view.categories()
        .iter()
        .map(|c| {
            let label = c.label(lang);
            if *c == view.active {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_ready(out: &mut String, view: &ResultView, lang: Language) {
    let t = strings(lang);
    let r = &view.result;
    line(out, lang, &format!("🎯 {}", t.detected_challenge));
    line(out, lang, &r.problem);
    line(out, lang, "");
    line(
        out,
        lang,
        &format!(
            "{}: {} {}",
            t.used_technique,
            r.technique.icon,
            r.technique.display_name(lang)
        ),
    );
    line(out, lang, r.technique.display_description(lang));
    line(out, lang, &r.analysis);
    line(out, lang, "");
    line(out, lang, &format!("{} {}", t.category, category_bar(view, lang)));
    line(out, lang, "");
    for (i, s) in view.visible() {
        let star = if view.favorites.contains(&i) { " ★" } else { "" };
        line(out, lang, &format!("{}. {} {}{}", i + 1, s.emoji, s.title, star));
        line(out, lang, &format!("   {}", s.text));
        line(
            out,
            lang,
            &format!(
                "   {} {}  {} {}  #{}",
                t.impact, s.impact, t.feasibility, s.feasibility, s.category
            ),
        );
        line(out, lang, &format!("   {}: {}", t.next_step, s.next_step));
        line(out, lang, "");
    }
    line(
        out,
        lang,
        &format!(
            ":new {}  :copyall {}  :lang {}",
            t.new_challenge, t.copy_all_short, t.switch_language
        ),
    );
}

/// 画面全体（Loading 以外）と通知を描画する
pub fn render(state: &SessionState) -> String {
    let mut out = String::new();
    let lang = state.language;
    match &state.phase {
        Phase::Idle => render_idle(&mut out, lang),
        Phase::Loading { .. } => {}
        Phase::Ready(view) => render_ready(&mut out, view, lang),
    }
    out.push_str(&render_notifications(state.notifications.active(), lang));
    out
}

/// 対話コマンドの一覧
pub fn help_text() -> &'static str {
    "Commands:\n  <text>             solve a challenge\n  :ex <n>            solve the n-th example\n  :fav <n>           toggle favorite on solution n\n  :cat <name|all|fav> filter by category\n  :copy <n>          copy solution n\n  :copyall           copy all solutions\n  :lang              switch language\n  :new               start a new challenge\n  :help              show this help\n  :quit              exit\n"
}
