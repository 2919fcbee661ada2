use varfile_common::Position;

/// A character source the line scanner can drive.
///
/// The scanner only ever needs one character of lookahead: it reads,
/// and if the character belongs to the next construct it pushes it back.
/// Literal regions let the scanner capture keys and values without
/// copying them one character at a time.
pub trait CharSource {
    /// Returns the next decoded character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;

    /// Rewinds to the state right before the most recent `next_char` call.
    ///
    /// Only one level of pushback is supported.
    fn pushback(&mut self);

    /// Returns the current position.
    fn position(&self) -> Position;

    /// Starts capturing the characters consumed from here on.
    fn start_literal(&mut self);

    /// Stops capturing and returns everything consumed since `start_literal`.
    fn stop_literal(&mut self) -> String;

    /// Reports a diagnostic at the current position. Scanning continues.
    fn report_error(&mut self, message: &str);
}
