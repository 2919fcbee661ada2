use crate::traits::CharSource;
use tracing::trace;

/// One `key = value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Outcome of a single scanning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// An assignment line was read.
    Record(Record),
    /// A malformed line was reported and discarded.
    Error,
    /// The input is exhausted.
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SkipSeparators,
    CommentLine,
    ReadKey,
    ExpectEquals,
    ReadValue,
    /// Holds the offending character, `None` at end of input.
    Error(Option<char>),
    SkipRestOfLine,
}

fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Returns true for characters allowed in a key.
pub fn is_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

fn unexpected(found: Option<char>) -> String {
    match found {
        Some(ch) if ch.is_control() => format!("unexpected token {}", ch.escape_default()),
        Some(ch) => format!("unexpected token {}", ch),
        None => "unexpected end of input".to_string(),
    }
}

/// Splits a variables file into `(key, value)` records.
///
/// The scanner is primed on construction: after `new`, either `is_done`
/// is true or `key`/`value` hold the first record. Each `advance` moves
/// to the next record, skipping blank and comment lines. A malformed
/// line is reported through the source, discarded, and scanning resumes
/// on the following line.
pub struct LineScanner<S> {
    source: S,
    current: Option<Record>,
    done: bool,
}

impl<S: CharSource> LineScanner<S> {
    /// Creates a scanner and reads the first record.
    pub fn new(source: S) -> Self {
        let mut scanner = Self {
            source,
            current: None,
            done: false,
        };
        scanner.advance();
        scanner
    }

    /// Returns true once the input is exhausted.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Key of the current record, empty when done.
    pub fn key(&self) -> &str {
        self.current.as_ref().map_or("", |r| r.key.as_str())
    }

    /// Value of the current record, empty when done.
    pub fn value(&self) -> &str {
        self.current.as_ref().map_or("", |r| r.value.as_str())
    }

    /// Returns the current record.
    pub fn record(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the scanner and returns the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Moves to the next record, overwriting the current one.
    pub fn advance(&mut self) {
        self.current = None;
        loop {
            match self.step() {
                Scan::Record(record) => {
                    self.current = Some(record);
                    return;
                }
                Scan::Error => continue,
                Scan::EndOfInput => {
                    self.done = true;
                    return;
                }
            }
        }
    }

    /// Runs the line state machine until it produces an outcome.
    ///
    /// This bypasses the current record; prefer `advance` or iteration.
    pub fn step(&mut self) -> Scan {
        let mut state = State::SkipSeparators;
        let mut key = String::new();

        loop {
            state = match state {
                State::SkipSeparators => match self.skip_while(is_separator) {
                    None => return Scan::EndOfInput,
                    Some('#') => State::CommentLine,
                    Some(ch) if is_key_char(ch) => {
                        self.source.pushback();
                        State::ReadKey
                    }
                    Some(ch) => State::Error(Some(ch)),
                },
                State::CommentLine => {
                    self.skip_line();
                    State::SkipSeparators
                }
                State::ReadKey => {
                    key = self.read_literal(is_key_char);
                    State::ExpectEquals
                }
                State::ExpectEquals => match self.skip_while(is_blank) {
                    Some('=') => State::ReadValue,
                    other => State::Error(other),
                },
                State::ReadValue => {
                    self.skip_while(is_blank);
                    self.source.pushback();
                    let value = self.read_literal(|ch| ch != '\n');
                    trace!(key = %key, "scanned record");
                    return Scan::Record(Record { key, value });
                }
                State::Error(found) => {
                    // Point the diagnostic at the offending character itself.
                    self.source.pushback();
                    self.source.report_error(&unexpected(found));
                    State::SkipRestOfLine
                }
                State::SkipRestOfLine => {
                    self.skip_line();
                    return Scan::Error;
                }
            };
        }
    }

    /// Consumes characters matching `predicate` and returns the first one
    /// that does not, or `None` at end of input.
    fn skip_while(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        loop {
            match self.source.next_char() {
                Some(ch) if predicate(ch) => continue,
                other => return other,
            }
        }
    }

    /// Consumes through the next `\n` or to end of input.
    fn skip_line(&mut self) {
        self.skip_while(|ch| ch != '\n');
    }

    /// Captures the run of characters matching `predicate`.
    fn read_literal(&mut self, predicate: impl Fn(char) -> bool) -> String {
        self.source.start_literal();
        self.skip_while(predicate);
        self.source.pushback();
        self.source.stop_literal()
    }
}

impl<S: CharSource> Iterator for LineScanner<S> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let record = self.current.take();
        self.advance();
        record
    }
}
