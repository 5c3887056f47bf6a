//! Greedy word wrap for annotation labels.

/// Annotation width used by the rendering hand-off unless overridden.
pub const DEFAULT_WRAP_WIDTH: usize = 32;

/// Break `text` into lines of at most `max_width` characters without
/// splitting words. A lone word longer than `max_width` gets its own
/// over-length line. Pure function of its inputs.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn lines_respect_the_width_and_preserve_word_order() {
        let text = "a very long sentence with many short words";
        let lines = wrap(text, 10);
        for line in &lines {
            assert!(line.chars().count() <= 10, "line too long: {line:?}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("moved house", 32), vec!["moved house"]);
    }

    #[test]
    fn an_overlong_word_gets_its_own_line() {
        let lines = wrap("started antidisestablishmentarianism club", 10);
        assert_eq!(
            lines,
            vec!["started", "antidisestablishmentarianism", "club"]
        );
    }

    #[test]
    fn empty_and_whitespace_only_input_produce_no_lines() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   \t ", 10).is_empty());
    }

    #[test]
    fn wrapping_is_deterministic() {
        let a = wrap("one two three four five six", 9);
        let b = wrap("one two three four five six", 9);
        assert_eq!(a, b);
        assert_eq!(a, vec!["one two", "three", "four five", "six"]);
    }
}
