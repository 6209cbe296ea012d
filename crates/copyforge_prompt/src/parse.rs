//! Splitting a raw model response into discrete variants.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Numbered list marker at the start of a line: "1." "2、" "3)" "4：" etc.
static VARIANT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,3}\s*[.、．)）:：]\s*").expect("valid marker regex"));

// Horizontal-rule style separators between variants.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-{3,}|\*{3,}|={3,})\s*$").expect("valid separator regex"));

/// Splits raw response text into at most `max` variants.
///
/// A new variant starts at each numbered-list marker or horizontal-rule
/// separator; markers are stripped from the variant text. Entries are
/// trimmed and empty ones dropped. Text with no recognized delimiter is
/// returned whole as a single variant, so re-parsing an already-split
/// variant yields it unchanged.
///
/// # Examples
///
/// ```
/// use copyforge_prompt::split_variants;
///
/// let raw = "1. 第一版文案\n2. 第二版文案\n3. 第三版文案";
/// let variants = split_variants(raw, 3);
/// assert_eq!(variants, vec!["第一版文案", "第二版文案", "第三版文案"]);
/// ```
pub fn split_variants(raw: &str, max: usize) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String, variants: &mut Vec<String>| {
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            variants.push(trimmed.to_string());
        }
        current.clear();
    };

    for line in raw.lines() {
        if let Some(found) = VARIANT_MARKER.find(line) {
            flush(&mut current, &mut variants);
            current.push_str(&line[found.end()..]);
        } else if SEPARATOR.is_match(line) {
            flush(&mut current, &mut variants);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    flush(&mut current, &mut variants);

    debug!(parsed = variants.len(), max, "Split response into variants");
    variants.truncate(max);
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_numbered_list_markers() {
        let raw = "1. 开场抓人，三个卖点，行动号召。\n2、第二版，换个角度。\n3) 第三版，更口语。";
        let variants = split_variants(raw, 5);
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0], "开场抓人，三个卖点，行动号召。");
        assert_eq!(variants[2], "第三版，更口语。");
    }

    #[test]
    fn splits_on_horizontal_rules() {
        let raw = "第一版文案内容\n---\n第二版文案内容\n***\n第三版文案内容";
        let variants = split_variants(raw, 5);
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[1], "第二版文案内容");
    }

    #[test]
    fn keeps_multiline_variant_bodies() {
        let raw = "1. 抓人开头\n要点与展开内容\n结尾CTA\n2. 第二版开头\n第二版展开";
        let variants = split_variants(raw, 5);
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], "抓人开头\n要点与展开内容\n结尾CTA");
    }

    #[test]
    fn drops_empty_entries_and_truncates() {
        let raw = "1.\n2. 有内容的版本\n3. 多余的版本\n4. 再多一个";
        let variants = split_variants(raw, 2);
        assert_eq!(variants, vec!["有内容的版本", "多余的版本"]);
    }

    #[test]
    fn unmarked_text_is_one_variant() {
        let raw = "整段没有编号的文案，直接返回。";
        let variants = split_variants(raw, 3);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0], raw);
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        assert!(split_variants("  \n\n  ", 3).is_empty());
    }

    #[test]
    fn reparsing_split_output_is_idempotent() {
        let raw = "1. 第一版：抓人开头，卖点，CTA。\n2. 第二版：另一种结构。\n3. 第三版：口语表达。";
        let first = split_variants(raw, 3);

        for variant in &first {
            assert_eq!(split_variants(variant, 3), vec![variant.clone()]);
        }

        let rejoined = first.join("\n---\n");
        assert_eq!(split_variants(&rejoined, 3), first);
    }

    #[test]
    fn years_and_inline_numbers_do_not_split() {
        let raw = "2024年的爆款产品\n支持3种模式切换";
        let variants = split_variants(raw, 3);
        assert_eq!(variants.len(), 1);
    }
}
