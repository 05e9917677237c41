//! Tests for the word wrapper.

use super::*;

// ===== Fast path =====

#[test]
fn line_that_fits_is_returned_unchanged() {
    assert_eq!(wrap_line("hello", 5), vec!["hello"]);
}

#[test]
fn fast_path_preserves_whitespace() {
    let line = "  a   b  ";
    assert_eq!(wrap_line(line, 20), vec![line]);
}

#[test]
fn empty_line_yields_one_empty_row() {
    assert_eq!(wrap_line("", 10), vec![""]);
}

// ===== Greedy packing =====

#[test]
fn hello_world_at_width_five() {
    assert_eq!(wrap_line("hello world", 5), vec!["hello", "world"]);
}

#[test]
fn packed_lines_stay_strictly_narrower_than_width() {
    // "ab cd" would be exactly 5 wide, which does not pack.
    assert_eq!(wrap_line("ab cd ef", 5), vec!["ab", "cd", "ef"]);
}

#[test]
fn words_pack_while_they_fit() {
    assert_eq!(
        wrap_line("the quick brown fox jumps", 12),
        vec!["the quick", "brown fox", "jumps"]
    );
}

#[test]
fn word_of_exact_width_gets_its_own_line() {
    assert_eq!(wrap_line("abcde fg", 5), vec!["abcde", "fg"]);
    assert_eq!(wrap_line("fg abcde hi", 5), vec!["fg", "abcde", "hi"]);
}

#[test]
fn whitespace_runs_collapse_to_single_spaces() {
    assert_eq!(wrap_line("a    b   c", 5), vec!["a b", "c"]);
}

#[test]
fn leading_and_trailing_whitespace_is_dropped_when_wrapping() {
    assert_eq!(wrap_line("   ab cd   ", 6), vec!["ab cd"]);
}

#[test]
fn whitespace_only_line_wider_than_width_becomes_blank_row() {
    assert_eq!(wrap_line("          ", 3), vec![""]);
}

#[test]
fn tabs_count_as_whitespace() {
    assert_eq!(wrap_line("ab\tcd\tef", 6), vec!["ab cd", "ef"]);
}

// ===== Hard splitting =====

#[test]
fn spaceless_token_is_hard_split_at_width_minus_one() {
    let lines = wrap_line("abcdefghij", 4);
    assert_eq!(lines, vec!["abc", "def", "ghi", "j"]);
    assert!(lines.iter().all(|l| code_point_len(l) <= 3));
}

#[test]
fn hard_split_chunks_pack_with_following_words() {
    assert_eq!(wrap_line("abcdefg h", 4), vec!["abc", "def", "g h"]);
}

#[test]
fn hard_split_respects_multibyte_boundaries() {
    let word = "éééééééééé";
    let chunks = hard_split(word, 4);
    assert_eq!(chunks, vec!["ééé", "ééé", "ééé", "é"]);
    assert_eq!(chunks.concat(), word);
}

#[test]
fn cjk_text_wraps_on_code_points() {
    assert_eq!(
        wrap_line("日本語のテキスト", 4),
        vec!["日本語", "のテキ", "スト"]
    );
}

#[test]
fn hard_split_leaves_short_words_alone() {
    assert_eq!(hard_split("abcd", 4), vec!["abcd"]);
    assert_eq!(hard_split("", 4), vec![""]);
}

#[test]
fn width_one_splits_every_code_point() {
    assert_eq!(wrap_line("abc", 1), vec!["a", "b", "c"]);
}

#[test]
fn width_zero_is_treated_as_one() {
    assert_eq!(wrap_line("abc", 0), wrap_line("abc", 1));
}

#[test]
fn width_two_uses_single_code_point_chunks() {
    assert_eq!(hard_split("abc", 2), vec!["a", "b", "c"]);
}

// ===== Newline segmentation =====

#[test]
fn wrap_text_splits_on_newlines() {
    assert_eq!(
        wrap_text("one\n\ntwo", Some(80)),
        vec!["one", "", "two"]
    );
}

#[test]
fn wrap_text_without_width_only_splits_newlines() {
    let long = "x".repeat(500);
    assert_eq!(wrap_text(&long, None), vec![long.clone()]);
    assert_eq!(wrap_text("a\nb", None), vec!["a", "b"]);
}

#[test]
fn wrap_text_wraps_each_segment_independently() {
    assert_eq!(
        wrap_text("hello world\nhi", Some(5)),
        vec!["hello", "world", "hi"]
    );
}

#[test]
fn wrap_text_trailing_newline_adds_empty_row() {
    assert_eq!(wrap_text("line\n", Some(10)), vec!["line", ""]);
}

#[test]
fn wrap_text_of_empty_string_is_single_empty_row() {
    assert_eq!(wrap_text("", Some(10)), vec![""]);
    assert_eq!(wrap_text("", None), vec![""]);
}
