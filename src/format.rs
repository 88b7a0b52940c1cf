//! Display Formatting
//!
//! Preview text derivation and relative date labels for list rows.

const PREVIEW_MAX_CHARS: usize = 80;
const MS_PER_DAY: u64 = 86_400_000;

fn is_bullet_or_space(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '*'
}

/// One-line preview of the details text: leading list bullets stripped,
/// bullet-prefixed line breaks collapsed to single spaces, truncated to
/// 80 chars with an ellipsis. Whitespace-only details yield an empty
/// preview (the row omits the preview line).
pub fn preview(details: &str) -> String {
    if details.trim().is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let mut chars = details.chars().peekable();
    while matches!(chars.peek(), Some(c) if is_bullet_or_space(*c)) {
        chars.next();
    }
    while let Some(c) = chars.next() {
        if c == '\n' {
            out.push(' ');
            // Swallow the next line's bullet prefix (and any blank lines)
            while matches!(chars.peek(), Some(c) if is_bullet_or_space(*c)) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    if out.chars().count() > PREVIEW_MAX_CHARS {
        let mut truncated: String = out.chars().take(PREVIEW_MAX_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        out
    }
}

/// Calendar-day difference (UTC day numbers, not 24h buckets)
fn day_diff(created_ms: u64, now_ms: u64) -> u64 {
    (now_ms / MS_PER_DAY).saturating_sub(created_ms / MS_PER_DAY)
}

/// Relative age label: "today", "yesterday", then floor'd days, weeks, months
pub fn relative_date(created_ms: u64, now_ms: u64) -> String {
    match day_diff(created_ms, now_ms) {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < 7 => format!("{d}d ago"),
        d if d < 30 => format!("{}w ago", d / 7),
        d => format!("{}mo ago", d / 30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_strips_bullets_and_joins_lines() {
        assert_eq!(preview("- item one\n- item two"), "item one item two");
        assert_eq!(preview("* starred\n  * nested"), "starred nested");
        assert_eq!(preview("plain\n\nafter blank"), "plain after blank");
    }

    #[test]
    fn test_preview_empty_details() {
        assert_eq!(preview(""), "");
        assert_eq!(preview("   \n  "), "");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long: String = "x".repeat(100);
        let p = preview(&long);
        assert_eq!(p.len(), 83);
        assert_eq!(&p[..80], "x".repeat(80).as_str());
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_keeps_short_text_untouched() {
        assert_eq!(preview("short note"), "short note");
    }

    #[test]
    fn test_relative_date_buckets() {
        let now = 100 * MS_PER_DAY;
        assert_eq!(relative_date(now, now), "today");
        assert_eq!(relative_date(now - MS_PER_DAY, now), "yesterday");
        assert_eq!(relative_date(now - 3 * MS_PER_DAY, now), "3d ago");
        assert_eq!(relative_date(now - 10 * MS_PER_DAY, now), "1w ago");
        assert_eq!(relative_date(now - 29 * MS_PER_DAY, now), "4w ago");
        assert_eq!(relative_date(now - 40 * MS_PER_DAY, now), "1mo ago");
        assert_eq!(relative_date(now - 65 * MS_PER_DAY, now), "2mo ago");
    }

    #[test]
    fn test_relative_date_exactly_24h_is_yesterday_bucket() {
        // Mid-day timestamps exactly 24h apart still differ by one
        // calendar day
        let now = 100 * MS_PER_DAY + 12 * 3_600_000;
        assert_eq!(relative_date(now - MS_PER_DAY, now), "yesterday");
    }

    #[test]
    fn test_relative_date_future_clamps_to_today() {
        let now = 100 * MS_PER_DAY;
        assert_eq!(relative_date(now + MS_PER_DAY, now), "today");
    }
}
