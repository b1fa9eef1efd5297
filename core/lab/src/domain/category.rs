//! カテゴリ絞り込み
//!
//! 「すべて」「お気に入り」は型で区別する番兵。表示ラベルは言語ごとの文字列表から引くので、
//! 解決案のカテゴリ名が番兵ラベルと同じ綴りでも衝突しない。

use super::i18n::strings;
use super::language::Language;
use super::solution::Solution;
use std::collections::BTreeSet;

/// お気に入り（現在の結果内の添字の集合）
pub type FavoriteSet = BTreeSet<usize>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Favorites,
    Named(String),
}

impl CategoryFilter {
    /// 表示ラベル
    pub fn label(&self, lang: Language) -> &str {
        match self {
            Self::All => strings(lang).all,
            Self::Favorites => strings(lang).favorites,
            Self::Named(name) => name,
        }
    }

    /// 対話コマンドの引数から解釈する
    ///
    /// offered に同名のカテゴリがあればそれを優先する。無ければ "all" / "fav" と、
    /// どちらかの言語の「すべて」「お気に入り」ラベル（大文字小文字は無視）を番兵として読む。
    pub fn from_arg(arg: &str, offered: &[CategoryFilter]) -> Self {
        let arg = arg.trim();
        let named = Self::Named(arg.to_string());
        if offered.contains(&named) {
            return named;
        }
        let is_label = |pick: fn(Language) -> &'static str| {
            Language::ALL.iter().any(|&l| pick(l).to_lowercase() == arg.to_lowercase())
        };
        match arg {
            "fav" => Self::Favorites,
            _ if is_label(|l| strings(l).all) => Self::All,
            _ if is_label(|l| strings(l).favorites) => Self::Favorites,
            _ => named,
        }
    }
}

/// 選択可能なカテゴリ一覧: All、出現順の重複なしカテゴリ、お気に入りがあれば末尾に Favorites
pub fn categories(solutions: &[Solution], favorites: &FavoriteSet) -> Vec<CategoryFilter> {
    let mut out = vec![CategoryFilter::All];
    let mut seen = BTreeSet::new();
    for s in solutions {
        if seen.insert(s.category.as_str()) {
            out.push(CategoryFilter::Named(s.category.clone()));
        }
    }
    if !favorites.is_empty() {
        out.push(CategoryFilter::Favorites);
    }
    out
}

/// 絞り込み結果を (元の添字, 解決案) で元の順序のまま返す
pub fn filter<'a>(
    solutions: &'a [Solution],
    favorites: &FavoriteSet,
    active: &CategoryFilter,
) -> Vec<(usize, &'a Solution)> {
    solutions
        .iter()
        .enumerate()
        .filter(|(i, s)| match active {
            CategoryFilter::All => true,
            CategoryFilter::Favorites => favorites.contains(i),
            CategoryFilter::Named(name) => &s.category == name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solution::Score;

    fn sol(title: &str, category: &str) -> Solution {
        Solution {
            title: title.to_string(),
            text: String::new(),
            emoji: "💡".to_string(),
            category: category.to_string(),
            impact: Score::new(5).unwrap(),
            feasibility: Score::new(5).unwrap(),
            next_step: String::new(),
        }
    }

    fn named(s: &str) -> CategoryFilter {
        CategoryFilter::Named(s.to_string())
    }

    #[test]
    fn test_categories_first_seen_without_duplicates() {
        let sols = vec![sol("1", "A"), sol("2", "A"), sol("3", "B"), sol("4", "C")];
        let cats = categories(&sols, &FavoriteSet::new());
        assert_eq!(cats, vec![CategoryFilter::All, named("A"), named("B"), named("C")]);
    }

    #[test]
    fn test_favorites_sentinel_appended_last_when_non_empty() {
        let sols = vec![sol("1", "B"), sol("2", "A")];
        let favs: FavoriteSet = [1].into_iter().collect();
        let cats = categories(&sols, &favs);
        assert_eq!(cats.last(), Some(&CategoryFilter::Favorites));
        assert_eq!(cats[1], named("B"));
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let sols = vec![sol("1", "A"), sol("2", "B"), sol("3", "A")];
        let out = filter(&sols, &FavoriteSet::new(), &CategoryFilter::All);
        let idx: Vec<usize> = out.iter().map(|(i, _)| *i).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_named_and_favorites() {
        let sols = vec![sol("1", "A"), sol("2", "B"), sol("3", "A")];
        let favs: FavoriteSet = [2, 1].into_iter().collect();
        let by_name: Vec<usize> = filter(&sols, &favs, &named("A")).iter().map(|(i, _)| *i).collect();
        assert_eq!(by_name, vec![0, 2]);
        let by_fav: Vec<usize> = filter(&sols, &favs, &CategoryFilter::Favorites)
            .iter()
            .map(|(i, _)| *i)
            .collect();
        assert_eq!(by_fav, vec![1, 2]);
    }

    #[test]
    fn test_category_spelled_like_sentinel_does_not_collide() {
        let sols = vec![sol("1", "All"), sol("2", "B")];
        let cats = categories(&sols, &FavoriteSet::new());
        assert_eq!(cats, vec![CategoryFilter::All, named("All"), named("B")]);
        assert_eq!(filter(&sols, &FavoriteSet::new(), &named("All")).len(), 1);
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(CategoryFilter::All.label(Language::En), "All");
        assert_eq!(CategoryFilter::Favorites.label(Language::Ar), "المفضلة");
        assert_eq!(named("Tech").label(Language::Ar), "Tech");
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(CategoryFilter::from_arg("all", &[]), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_arg("fav", &[]), CategoryFilter::Favorites);
        assert_eq!(CategoryFilter::from_arg("favorites", &[]), CategoryFilter::Favorites);
        assert_eq!(CategoryFilter::from_arg(" Tech ", &[]), named("Tech"));
    }

    #[test]
    fn test_from_arg_accepts_bar_labels_in_both_languages() {
        assert_eq!(CategoryFilter::from_arg("All", &[]), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_arg("الكل", &[]), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_arg("FAVORITES", &[]), CategoryFilter::Favorites);
        assert_eq!(CategoryFilter::from_arg("المفضلة", &[]), CategoryFilter::Favorites);
    }

    #[test]
    fn test_from_arg_prefers_real_category_with_label_name() {
        let offered = [CategoryFilter::All, named("All")];
        assert_eq!(CategoryFilter::from_arg("All", &offered), named("All"));
        assert_eq!(CategoryFilter::from_arg("all", &offered), CategoryFilter::All);
    }
}
