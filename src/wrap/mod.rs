//! Greedy word wrapping measured in Unicode code points.
//!
//! Turns one logical line into the physical lines that fit a given number of
//! display columns. Lengths are counted in `char`s, never bytes, so a
//! multi-byte character always lands whole on a single physical line.
//!
//! # Algorithm
//!
//! 1. A line of at most `width` code points is emitted unchanged, spacing and
//!    all.
//! 2. Longer lines are split on runs of whitespace. The whitespace is dropped
//!    and words are re-joined with single spaces.
//! 3. Words longer than `width` are hard-split into chunks of `width - 1`
//!    code points.
//! 4. Words are packed greedily. A word joins the current line only while the
//!    line stays strictly narrower than `width`; a word of exactly `width`
//!    code points gets a line of its own.
//!
//! # Examples
//!
//! ```
//! # use scrollbuf::wrap::wrap_line;
//! assert_eq!(wrap_line("hello world", 5), vec!["hello", "world"]);
//! assert_eq!(wrap_line("short", 80), vec!["short"]);
//! ```

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod tests;

/// Number of Unicode code points in `text`.
pub fn code_point_len(text: &str) -> usize {
    text.chars().count()
}

/// Wrap one line of text (no embedded newlines) to `width` columns.
///
/// A `width` of 0 is treated as 1. The result always holds at least one line:
/// a whitespace-only line that is too wide to pass through unchanged
/// collapses to a single empty line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    if code_point_len(line) <= width {
        return vec![line.to_string()];
    }

    let mut output = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for token in line.split_whitespace().flat_map(|word| hard_split(word, width)) {
        let token_len = code_point_len(token);
        let separator = usize::from(!current.is_empty());

        if current_len + separator + token_len < width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(token);
            current_len += separator + token_len;
            continue;
        }

        if !current.is_empty() {
            output.push(std::mem::take(&mut current));
        }

        if token_len == width {
            output.push(token.to_string());
            current_len = 0;
        } else {
            current.push_str(token);
            current_len = token_len;
        }
    }

    if !current.is_empty() {
        output.push(current);
    }

    if output.is_empty() {
        output.push(String::new());
    }

    output
}

/// Split a single word into chunks that fit `width` columns.
///
/// Words of at most `width` code points come back whole. Longer words are
/// cut into runs of `width - 1` code points (the last run may be shorter),
/// always on `char` boundaries. With `width <= 2` the runs are one code
/// point long.
///
/// ```
/// # use scrollbuf::wrap::hard_split;
/// assert_eq!(hard_split("abcdefghij", 4), vec!["abc", "def", "ghi", "j"]);
/// assert_eq!(hard_split("abcd", 4), vec!["abcd"]);
/// ```
pub fn hard_split(word: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);

    if code_point_len(word) <= width {
        return vec![word];
    }

    let chunk_len = (width - 1).max(1);
    let mut chunks = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(chunk_len)
            .map_or(rest.len(), |(index, _)| index);
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }

    chunks
}

/// Wrap text that may contain embedded newlines.
///
/// The text is segmented on `'\n'` first and every segment is wrapped on its
/// own, so an empty segment still produces an empty physical line. With
/// `width == None` segments are emitted unchanged.
///
/// The result is never empty.
pub fn wrap_text(text: &str, width: Option<usize>) -> Vec<String> {
    match width {
        Some(width) => text
            .split('\n')
            .flat_map(|segment| wrap_line(segment, width))
            .collect(),
        None => text.split('\n').map(str::to_string).collect(),
    }
}
