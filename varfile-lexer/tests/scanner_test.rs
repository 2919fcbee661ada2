use varfile_lexer::{ByteSource, Diagnostic, LineScanner, Record};

fn scan(input: &str) -> (Vec<Record>, Vec<Diagnostic>) {
    let mut scanner = LineScanner::new(ByteSource::new(input.as_bytes(), Vec::<Diagnostic>::new()));
    let records: Vec<Record> = scanner.by_ref().collect();
    (records, scanner.into_source().into_sink())
}

#[test]
fn test_simple_assignments() {
    let (records, diags) = scan("A = 1\nB=2\n");
    assert_eq!(records, vec![Record::new("A", "1"), Record::new("B", "2")]);
    assert!(diags.is_empty());
}

#[test]
fn test_comments_and_blank_lines() {
    let (records, diags) = scan("# comment\n\n   \n\t# indented comment\nA = 1\n\n");
    assert_eq!(records, vec![Record::new("A", "1")]);
    assert!(diags.is_empty());
}

#[test]
fn test_interior_spacing_around_equals() {
    let (records, _) = scan("KEY \t =\t  VALUE\n");
    assert_eq!(records, vec![Record::new("KEY", "VALUE")]);
}

#[test]
fn test_value_keeps_trailing_whitespace() {
    let (records, _) = scan("A = x y  \t\n");
    assert_eq!(records[0].value, "x y  \t");
}

#[test]
fn test_value_keeps_equals_and_hash() {
    let (records, _) = scan("url = http://h/?a=b#frag\n");
    assert_eq!(records[0].value, "http://h/?a=b#frag");
}

#[test]
fn test_empty_value() {
    let (records, diags) = scan("A =\nB =   \nC=\n");
    assert_eq!(
        records,
        vec![
            Record::new("A", ""),
            Record::new("B", ""),
            Record::new("C", ""),
        ]
    );
    assert!(diags.is_empty());
}

#[test]
fn test_key_character_class() {
    let (records, diags) = scan("my-key_2 = a\n1key = b\n");
    assert_eq!(
        records,
        vec![Record::new("my-key_2", "a"), Record::new("1key", "b")]
    );
    assert!(diags.is_empty());
}

#[test]
fn test_last_line_without_newline() {
    let (records, diags) = scan("A = 1\nB = last");
    assert_eq!(records, vec![Record::new("A", "1"), Record::new("B", "last")]);
    assert!(diags.is_empty());
}

#[test]
fn test_leading_whitespace_before_key() {
    let (records, _) = scan("  \t A = 1\n");
    assert_eq!(records, vec![Record::new("A", "1")]);
}

#[test]
fn test_crlf_line_endings() {
    let (records, diags) = scan("A = 1\r\nB = 2\r\n");
    // `\r` is only skipped when it leads a line; values are raw.
    assert_eq!(
        records,
        vec![Record::new("A", "1\r"), Record::new("B", "2\r")]
    );
    assert!(diags.is_empty());
}

#[test]
fn test_unicode_value() {
    let (records, _) = scan("greeting = héllo wörld 👋\n");
    assert_eq!(records[0].value, "héllo wörld 👋");
}

#[test]
fn test_duplicate_keys_are_all_yielded() {
    let (records, _) = scan("A = 1\nA = 2\n");
    assert_eq!(records, vec![Record::new("A", "1"), Record::new("A", "2")]);
}
