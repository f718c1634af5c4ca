//! Post-hoc trims applied to language-model output.
//!
//! The formatter's system prompt already forbids meta-commentary, but
//! models still open with filler ("Sure!", "Here's..."), separator
//! lines, or an emoji. These are fixed string trims, not NLP.

/// Filler phrases stripped from the start of a formatted answer,
/// matched case-insensitively.
const FILLER_PREFIXES: &[&str] = &[
    "sure thing!",
    "sure!",
    "sure,",
    "certainly!",
    "certainly,",
    "of course!",
    "of course,",
    "absolutely!",
    "here's",
    "here is",
    "let me",
];

/// Strip leading filler phrases, `---` separators, and emoji.
///
/// Trims repeatedly until no rule applies, so "Sure! Here's ..." loses
/// both phrases.
pub fn strip_filler(answer: &str) -> String {
    let mut rest = answer.trim();
    loop {
        let before = rest;

        if let Some(stripped) = rest.strip_prefix("---") {
            rest = stripped.trim_start();
        }

        for prefix in FILLER_PREFIXES {
            if let Some(head) = rest.get(..prefix.len())
                && head.eq_ignore_ascii_case(prefix)
            {
                rest = rest[prefix.len()..].trim_start();
                break;
            }
        }

        rest = strip_leading_emoji(rest);

        if rest == before {
            return rest.to_string();
        }
    }
}

/// Parse a "suggest exactly 2 follow-up questions" completion.
///
/// Splits on newlines, strips `1.` / `1)` numbering and bullet markers,
/// drops blank lines, truncates to two.
pub fn parse_followup_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(strip_numbering)
        .filter(|line| !line.is_empty())
        .take(2)
        .map(str::to_string)
        .collect()
}

fn strip_numbering(line: &str) -> &str {
    let mut rest = line.trim();

    if let Some(stripped) = rest.strip_prefix('-').or_else(|| rest.strip_prefix('*')) {
        rest = stripped.trim_start();
    }

    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let after = &rest[digits..];
        if let Some(stripped) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
            return stripped.trim();
        }
    }

    rest
}

fn strip_leading_emoji(s: &str) -> &str {
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if is_emoji(c) || matches!(c, '\u{FE0F}' | '\u{200D}') {
            rest = rest[c.len_utf8()..].trim_start();
        } else {
            break;
        }
    }
    rest
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_filler_phrase() {
        assert_eq!(strip_filler("Sure! We open at 8am."), "We open at 8am.");
        assert_eq!(strip_filler("here's what I found."), "what I found.");
    }

    #[test]
    fn test_strip_stacked_filler() {
        assert_eq!(strip_filler("Sure! Here's the menu."), "the menu.");
    }

    #[test]
    fn test_strip_separator_and_emoji() {
        assert_eq!(strip_filler("--- We open at 8am."), "We open at 8am.");
        assert_eq!(strip_filler("\u{1F600} We open at 8am."), "We open at 8am.");
    }

    #[test]
    fn test_strip_filler_leaves_clean_answer_alone() {
        assert_eq!(strip_filler("We open at 8am."), "We open at 8am.");
    }

    #[test]
    fn test_strip_filler_multibyte_head_does_not_panic() {
        // First bytes are mid-codepoint for every prefix length
        assert_eq!(strip_filler("日本語のテキスト"), "日本語のテキスト");
    }

    #[test]
    fn test_parse_numbered_followups() {
        let lines = parse_followup_lines("1. Do you deliver?\n2) What are your hours?");
        assert_eq!(lines, vec!["Do you deliver?", "What are your hours?"]);
    }

    #[test]
    fn test_parse_bulleted_followups() {
        let lines = parse_followup_lines("- Do you deliver?\n* What are your hours?");
        assert_eq!(lines, vec!["Do you deliver?", "What are your hours?"]);
    }

    #[test]
    fn test_parse_drops_blanks_and_truncates_to_two() {
        let lines = parse_followup_lines("\nFirst?\n\nSecond?\nThird?\n");
        assert_eq!(lines, vec!["First?", "Second?"]);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_followup_lines("").is_empty());
        assert!(parse_followup_lines("\n  \n").is_empty());
    }
}
