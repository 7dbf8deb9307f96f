// ABOUTME: Shared utility functions for StratOS
// ABOUTME: Sequential id allocation and character-safe text truncation

/// Allocate the next id as max existing id + 1, starting at 1
pub fn next_id<I>(ids: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    ids.into_iter().max().map_or(1, |max| max + 1)
}

/// First `max_chars` characters of `text`, never splitting a code point
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Truncates a string to a maximum length with ellipsis
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", preview(text, max_length.saturating_sub(3)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_empty_starts_at_one() {
        assert_eq!(next_id(Vec::<u32>::new()), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        // Gaps left by deletions must not produce collisions
        assert_eq!(next_id(vec![1, 7, 3]), 8);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(150);
        let head = preview(&text, 100);
        assert_eq!(head.chars().count(), 100);
        assert_eq!(preview("short", 100), "short");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Market Research Analysis", 10), "Market ...");
        assert_eq!(truncate("Audit", 10), "Audit");
    }
}
