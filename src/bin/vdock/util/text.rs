/// Greedy word wrap on character count. Words longer than `width` are
/// split so no line exceeds it; always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("failed fetching cluster file", 15),
            vec!["failed fetching", "cluster file"]
        );
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn splits_overlong_urls() {
        let lines = wrap("see http://example.org/abcdefgh", 10);
        assert_eq!(lines, vec!["see", "http://exa", "mple.org/a", "bcdefgh"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn truncates_by_characters() {
        assert_eq!(truncate("deltaG", 6), "deltaG");
        assert_eq!(truncate("ClusterRank", 8), "Cluster…");
        assert_eq!(truncate("ΔG-score", 3), "ΔG…");
        assert_eq!(truncate("x", 0), "");
    }
}
