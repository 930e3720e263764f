use gridline_term::{display_width, fit_cell};

#[test]
fn test_short_strings_are_padded() {
    assert_eq!(fit_cell("ab", 5), "ab   ");
    assert_eq!(fit_cell("", 3), "   ");
}

#[test]
fn test_exact_fit_is_untouched() {
    assert_eq!(fit_cell("abcde", 5), "abcde");
}

#[test]
fn test_long_strings_truncate_with_ellipsis() {
    let cell = fit_cell("a very long header", 8);
    assert_eq!(display_width(&cell), 8);
    assert!(cell.ends_with('…'));
    assert!(cell.starts_with("a very"));
}

#[test]
fn test_zero_width_is_empty() {
    assert_eq!(fit_cell("anything", 0), "");
}

#[test]
fn test_wide_characters_never_overflow_the_cell() {
    // Each CJK glyph is two cells wide; a boundary split must pad instead of
    // overflowing.
    let cell = fit_cell("日本語テキスト", 6);
    assert_eq!(display_width(&cell), 6);
}
