//! クリップボードへ書き出すテキストの整形

use super::i18n::strings;
use super::language::Language;
use super::solution::Solution;

/// 1件分のラベル付きブロック
pub fn format_solution(solution: &Solution, lang: Language) -> String {
    let s = strings(lang);
    format!(
        "💡 {}:\n\n[{}]\n{}\n\n{}: {}",
        s.export_header, solution.title, solution.text, s.next_step, solution.next_step
    )
}

/// 全件を空行区切りで連結する
pub fn format_all(solutions: &[Solution]) -> String {
    solutions
        .iter()
        .map(|s| format!("[{}]\n{}", s.title, s.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}
