//! Reading-time estimation

/// Words per minute assumed for the estimate
const WORDS_PER_MINUTE: usize = 200;

/// Estimate how long a body of text takes to read, as a display string
/// like `"3 min read"`. Whitespace-separated words at 200 words per
/// minute, rounded up to a whole minute, never below one.
pub fn estimate(text: &str) -> String {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_rounds_up_to_whole_minutes() {
        assert_eq!(estimate(&words(500)), "3 min read");
        assert_eq!(estimate(&words(200)), "1 min read");
        assert_eq!(estimate(&words(201)), "2 min read");
        assert_eq!(estimate(&words(400)), "2 min read");
    }

    #[test]
    fn test_short_text_is_one_minute() {
        assert_eq!(estimate("just a few words"), "1 min read");
        assert_eq!(estimate(""), "1 min read");
        assert_eq!(estimate("   \n\t  "), "1 min read");
    }

    #[test]
    fn test_counts_any_whitespace_separated_token() {
        // Markup counts as words, the same as prose
        assert_eq!(estimate("# Heading\n\nSome *emphasis* here."), "1 min read");
    }
}
