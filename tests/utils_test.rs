use vocadeck::utils::truncate_line;

#[test]
fn test_truncate_line_keeps_short_text() {
    assert_eq!(truncate_line("りんご", 40), "りんご");
    assert_eq!(truncate_line("", 40), "");
}

#[test]
fn test_truncate_line_cuts_by_characters() {
    assert_eq!(truncate_line("あいうえおかきくけこ", 5), "あいうえお…");
}

#[test]
fn test_truncate_line_marks_dropped_lines() {
    assert_eq!(truncate_line("first\nsecond", 40), "first…");
    assert_eq!(truncate_line("only line\n", 40), "only line");
}

#[test]
fn test_truncate_line_trailing_spaces_are_not_extra_lines() {
    assert_eq!(truncate_line("abc  ", 40), "abc  ");
    assert_eq!(truncate_line("abc  \n", 40), "abc  ");
    assert_eq!(truncate_line("abc  \n  def", 40), "abc  …");
}
