use std::borrow::Cow;

use derive_setters::Setters;
use lazy_regex::regex;
use regex::Regex;

use crate::chars;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Controls for [`wrap`].
#[derive(Clone, Debug, PartialEq, Setters)]
#[setters(into, strip_option)]
pub struct WrapOptions {
    /// Maximum characters per line. A width of 0 is treated as 1.
    pub width: usize,

    /// Separator inserted between lines. Platform line terminator when
    /// unset.
    pub newline: Option<String>,

    /// Split words longer than the width at the width instead of letting the
    /// line run long.
    pub break_long_words: bool,

    /// Regex locating break points. Unset or blank falls back to a single
    /// space.
    pub break_on: Option<String>,
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            newline: None,
            break_long_words: false,
            break_on: None,
        }
    }
}

/// Wraps `text` into lines of at most `width` characters, breaking at the
/// last break-pattern match inside each window.
///
/// A run of break matches at a line start is consumed without emitting an
/// empty line. When a word longer than the width has no break point inside
/// the window, it is split at the width if `break_long_words` is set;
/// otherwise the line runs to the next match past the limit, exceeding the
/// width on purpose. The final line never carries a trailing separator.
/// `None` passes through as `None`.
pub fn wrap(text: Option<&str>, options: &WrapOptions) -> Option<String> {
    let text = text?;
    let newline = options.newline.as_deref().unwrap_or(LINE_SEPARATOR);
    let width = options.width.max(1);
    let matcher = break_matcher(options.break_on.as_deref());

    // Byte offset of every character boundary, including the end of `text`,
    // so character-indexed windows slice without rescanning.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let length = boundaries.len() - 1;

    let mut wrapped = String::with_capacity(text.len() + 32);
    let mut offset = 0;
    // Width of the last match seen at a window start. Some(0) records that a
    // zero-width break swallowed a character, shifting later emits back by
    // one.
    let mut matcher_size: Option<usize> = None;

    while offset < length {
        let mut break_at: Option<usize> = None;
        let window_end = length.min(offset + width + 1);
        let window = &text[boundaries[offset]..boundaries[window_end]];
        let mut matches = matcher.find_iter(window);

        if let Some(first) = matches.next() {
            let start = char_offset(window, first.start());
            if start == 0 {
                let size = first.as_str().chars().count();
                matcher_size = Some(size);
                if size != 0 {
                    // Delimiter run at the line start: consume it without
                    // emitting an empty line.
                    offset += size;
                    continue;
                }
                offset += 1;
            }
            break_at = Some(start + offset);
        }

        if length - offset <= width {
            break;
        }

        // The break point is the last match at or before the limit.
        for candidate in matches {
            break_at = Some(char_offset(window, candidate.start()) + offset);
        }

        if let Some(at) = break_at {
            wrapped.push_str(&text[boundaries[offset]..boundaries[at]]);
            wrapped.push_str(newline);
            offset = at + 1;
        } else if options.break_long_words {
            if matcher_size == Some(0) {
                offset -= 1;
            }
            wrapped.push_str(&text[boundaries[offset]..boundaries[offset + width]]);
            wrapped.push_str(newline);
            offset += width;
            matcher_size = None;
        } else {
            // No break inside the window and splitting is off: run the line
            // to the next match past the limit, or to the end of the text.
            let rest = &text[boundaries[offset + width]..];
            if let Some(next_break) = matcher.find(rest) {
                matcher_size = Some(next_break.as_str().chars().count());
                let at = char_offset(rest, next_break.start()) + offset + width;
                if matcher_size == Some(0) && offset != 0 {
                    offset -= 1;
                }
                wrapped.push_str(&text[boundaries[offset]..boundaries[at]]);
                wrapped.push_str(newline);
                offset = at + 1;
            } else {
                if matcher_size == Some(0) && offset != 0 {
                    offset -= 1;
                }
                wrapped.push_str(&text[boundaries[offset]..]);
                offset = length;
                matcher_size = None;
            }
        }
    }

    if matcher_size == Some(0) && offset < length {
        offset -= 1;
    }
    // A zero-width-everywhere pattern can leave the cursor past the end;
    // clamp rather than fail.
    wrapped.push_str(&text[boundaries[offset.min(length)]..]);

    Some(wrapped)
}

fn break_matcher(pattern: Option<&str>) -> Cow<'static, Regex> {
    match pattern.filter(|pattern| !chars::is_blank(pattern)) {
        Some(pattern) => match Regex::new(pattern) {
            Ok(compiled) => Cow::Owned(compiled),
            Err(error) => {
                tracing::warn!(%error, pattern, "invalid break pattern, wrapping on spaces");
                Cow::Borrowed(default_break())
            }
        },
        None => Cow::Borrowed(default_break()),
    }
}

fn default_break() -> &'static Regex {
    regex!(" ")
}

fn char_offset(window: &str, byte_offset: usize) -> usize {
    window[..byte_offset].chars().count()
}
