pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Collapse newlines and runs of whitespace, then truncate
pub fn one_line(text: &str, max_chars: usize) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&normalized, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("Saga", 10), "Saga");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("The Night Archive", 10), "The Nig...");
    }

    #[test]
    fn test_truncate_tiny_budget() {
        assert_eq!(truncate("Hellboy", 2), "He");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("鋼の錬金術師", 5), "鋼の...");
    }

    #[test]
    fn test_one_line_collapses_whitespace() {
        assert_eq!(one_line("A  town\nof\tghosts", 40), "A town of ghosts");
    }
}
