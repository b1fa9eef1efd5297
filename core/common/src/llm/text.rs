//! 応答テキストの整形ヘルパー

use regex::Regex;
use std::sync::OnceLock;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)\s*```\s*$").expect("valid fence regex")
    })
}

/// Markdown のコードフェンス（```json ... ```）で全体が囲まれていれば中身だけを返す
///
/// 囲まれていなければ前後の空白を除いてそのまま返す。
pub fn strip_code_fence(text: &str) -> &str {
    match fence_re().captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().trim(),
        None => text.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_trimmed() {
        assert_eq!(strip_code_fence("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_json_fence_is_removed() {
        let text = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_code_fence(text), "{\"a\":1}");
    }

    #[test]
    fn test_bare_fence_is_removed() {
        let text = "\n```\n[1, 2]\n```\n";
        assert_eq!(strip_code_fence(text), "[1, 2]");
    }

    #[test]
    fn test_inner_backticks_are_kept() {
        let text = "{\"code\":\"use `x`\"}";
        assert_eq!(strip_code_fence(text), text);
    }
}
