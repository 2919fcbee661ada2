use crate::Position;

/// A saved read cursor.
///
/// The lexer stores one of these before every read so that the most
/// recent character can be pushed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// Byte index into the reader's buffer.
    index: usize,
    /// The position in the source at this checkpoint.
    position: Position,
}

impl Checkpoint {
    /// Creates a new checkpoint with the given buffer index and position.
    pub fn new(index: usize, position: Position) -> Self {
        Self { index, position }
    }

    /// Returns the buffer index stored in this checkpoint.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the position stored in this checkpoint.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the same checkpoint after the buffer was compacted by `by` bytes.
    pub fn shifted(self, by: usize) -> Self {
        debug_assert!(by <= self.index);
        Self {
            index: self.index - by,
            position: self.position,
        }
    }
}
