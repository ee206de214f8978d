use std::collections::HashSet;

/// Extracts the first character of each word in `text`.
///
/// With `delimiters` unset, whitespace separates words; with an explicit set,
/// exactly those characters do and whitespace carries no special meaning. An
/// explicit empty set yields an empty result.
pub fn initials(text: Option<&str>, delimiters: Option<&[char]>) -> Option<String> {
    let text = text?;
    if let Some(delimiters) = delimiters
        && delimiters.is_empty()
    {
        return Some(String::new());
    }
    let delimiter_set: Option<HashSet<char>> =
        delimiters.map(|delimiters| delimiters.iter().copied().collect());

    let mut result = String::with_capacity(text.len() / 2 + 1);
    let mut at_word_start = true;
    for c in text.chars() {
        let is_delimiter = match &delimiter_set {
            Some(set) => set.contains(&c),
            None => c.is_whitespace(),
        };
        if is_delimiter {
            at_word_start = true;
        } else if at_word_start {
            result.push(c);
            at_word_start = false;
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_initials_on_whitespace() {
        let actual = initials(Some("Ben John Lee"), None);
        assert_eq!(actual.as_deref(), Some("BJL"));
    }

    #[test]
    fn test_initials_on_custom_delimiter() {
        let actual = initials(Some("Ben_John_Lee"), Some(&['_']));
        assert_eq!(actual.as_deref(), Some("BJL"));
    }

    #[test]
    fn test_initials_on_mixed_delimiters() {
        let actual = initials(Some("Ben J.Lee"), Some(&[' ', '.']));
        assert_eq!(actual.as_deref(), Some("BJL"));
    }

    #[test]
    fn test_initials_custom_delimiters_exclude_whitespace() {
        // Whitespace is not implicitly a delimiter once a set is given.
        let actual = initials(Some("Ben_John Lee"), Some(&['_']));
        assert_eq!(actual.as_deref(), Some("BJ"));
    }

    #[test]
    fn test_initials_empty_delimiter_set() {
        let actual = initials(Some("Foo"), Some(&[]));
        assert_eq!(actual.as_deref(), Some(""));
    }

    #[test]
    fn test_initials_collapses_delimiter_runs() {
        let actual = initials(Some("  Ben   John  "), None);
        assert_eq!(actual.as_deref(), Some("BJ"));
    }

    #[test]
    fn test_initials_empty_text() {
        let actual = initials(Some(""), Some(&['_']));
        assert_eq!(actual.as_deref(), Some(""));
    }

    #[test]
    fn test_initials_none_passes_through() {
        let actual = initials(None, None);
        assert_eq!(actual, None);
    }

    #[test]
    fn test_initials_keeps_supplementary_plane_characters() {
        let actual = initials(Some("𝕬lpha 𝕭eta"), None);
        assert_eq!(actual.as_deref(), Some("𝕬𝕭"));
    }
}
