use crate::error::{Error, Result};

/// Abbreviates `text` between the `lower` and `upper` character bounds,
/// appending `append` when the result was shortened.
///
/// The break position is the first space at or after `lower`, capped at
/// `upper`; without a space the text is cut at `upper` exactly. An `upper`
/// of -1 means no upper bound. Bounds beyond the text length clamp to it.
/// `None` text passes through untouched.
///
/// # Errors
///
/// Returns an error when `upper` is below -1, or below `lower` without being
/// -1.
pub fn abbreviate(
    text: Option<&str>,
    lower: i32,
    upper: i32,
    append: Option<&str>,
) -> Result<Option<String>> {
    if upper < -1 {
        return Err(Error::UpperBelowMinimum);
    }
    if upper < lower && upper != -1 {
        return Err(Error::UpperBelowLower);
    }
    let Some(text) = text else {
        return Ok(None);
    };
    if text.is_empty() {
        return Ok(Some(String::new()));
    }

    let length = text.chars().count();
    let lower = (lower.max(0) as usize).min(length);
    let upper = if upper == -1 {
        length
    } else {
        (upper as usize).min(length)
    };
    let append = append.unwrap_or("");

    let space_at = text
        .chars()
        .enumerate()
        .skip(lower)
        .find(|(_, c)| *c == ' ')
        .map(|(index, _)| index);

    let mut result = String::with_capacity(text.len() + append.len());
    match space_at {
        None => {
            result.extend(text.chars().take(upper));
            if upper != length {
                result.push_str(append);
            }
        }
        Some(index) => {
            result.extend(text.chars().take(index.min(upper)));
            result.push_str(append);
        }
    }
    Ok(Some(result))
}
