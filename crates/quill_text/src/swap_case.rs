use crate::chars;

/// Swaps the case of every character, title-casing the first letter of each
/// word: uppercase and titlecase become lowercase, lowercase becomes
/// titlecase after whitespace and uppercase elsewhere. Uncased characters
/// pass through and reset the word boundary.
pub fn swap_case(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut result = String::with_capacity(text.len());
    let mut after_whitespace = true;
    for c in text.chars() {
        if chars::is_upper_or_title(c) {
            result.push(chars::to_lowercase_char(c));
            after_whitespace = false;
        } else if c.is_lowercase() {
            let swapped = if after_whitespace {
                chars::to_titlecase_char(c)
            } else {
                chars::to_uppercase_char(c)
            };
            result.push(swapped);
            after_whitespace = false;
        } else {
            after_whitespace = c.is_whitespace();
            result.push(c);
        }
    }
    Some(result)
}
