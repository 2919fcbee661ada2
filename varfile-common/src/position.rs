/// Represents the position of a character in a variables file.
///
/// Positions are only used for diagnostics: the lexer records one for
/// every character it reads so that errors can point at the offending
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed, reset on `\n`)
    ///
    /// Counted in decoded characters, not bytes: `é` advances the column by
    /// one. Bytes that fail to decode count as one column per skipped run.
    /// Use `offset` when a byte position is needed.
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Moves past a character that occupies `width` bytes.
    pub fn advance(&mut self, ch: char, width: usize) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.offset += width;
    }

    /// Moves past `width` bytes that did not decode to a character.
    pub fn skip(&mut self, width: usize) {
        self.column += 1;
        self.offset += width;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
