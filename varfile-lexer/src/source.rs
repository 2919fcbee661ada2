use crate::traits::CharSource;
use std::io::{ErrorKind, Read};
use std::ops::Range;
use tracing::{debug, trace};
use varfile_common::{Checkpoint, Diagnostic, DiagnosticSink, Position};

/// Default size of the read buffer in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

// Large enough for the longest UTF-8 sequence.
const MIN_CAPACITY: usize = 4;

/// A buffered byte reader that hands out decoded characters.
///
/// The buffer is refilled from the underlying reader on demand. Bytes
/// that may still be needed (an open literal region, the pushback
/// checkpoint) are moved to the front on refill and the buffer grows
/// when they fill it, so literals and pushback stay valid across refills
/// and a multi-byte character is never decoded from a torn read.
///
/// Encoding problems, NUL bytes and read failures are reported to the
/// diagnostic sink; none of them stops the scan.
pub struct ByteSource<R, D> {
    reader: R,
    sink: D,
    buffer: Vec<u8>,
    /// Read cursor into `buffer`.
    current: usize,
    /// End of valid data in `buffer`.
    end: usize,
    exhausted: bool,
    position: Position,
    previous: Option<Checkpoint>,
    literal: Option<usize>,
    /// Skipped bytes inside the open literal region.
    holes: Vec<Range<usize>>,
}

impl<R, D> ByteSource<R, D>
where
    R: Read,
    D: DiagnosticSink,
{
    /// Creates a source with the default buffer capacity.
    pub fn new(reader: R, sink: D) -> Self {
        Self::with_capacity(reader, sink, DEFAULT_CAPACITY)
    }

    /// Creates a source whose buffer starts at `capacity` bytes.
    pub fn with_capacity(reader: R, sink: D, capacity: usize) -> Self {
        Self {
            reader,
            sink,
            buffer: vec![0; capacity.max(MIN_CAPACITY)],
            current: 0,
            end: 0,
            exhausted: false,
            position: Position::new(),
            previous: None,
            literal: None,
            holes: Vec::new(),
        }
    }

    /// Returns the diagnostic sink.
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Consumes the source and returns its diagnostic sink.
    pub fn into_sink(self) -> D {
        self.sink
    }

    /// Returns the current buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn available(&self) -> usize {
        self.end - self.current
    }

    /// Makes `want` bytes available at the cursor if the stream still has them.
    fn ensure(&mut self, want: usize) -> bool {
        while self.available() < want {
            if self.exhausted {
                return false;
            }
            self.refill();
        }
        true
    }

    fn refill(&mut self) {
        let keep = [self.literal, self.previous.map(|cp| cp.index())]
            .into_iter()
            .flatten()
            .fold(self.current, usize::min);

        if keep > 0 {
            self.buffer.copy_within(keep..self.end, 0);
            self.current -= keep;
            self.end -= keep;
            self.literal = self.literal.map(|start| start - keep);
            self.previous = self.previous.map(|cp| cp.shifted(keep));
            for hole in &mut self.holes {
                *hole = hole.start - keep..hole.end - keep;
            }
        }

        if self.end == self.buffer.len() {
            let grown = self.buffer.len() * 2;
            self.buffer.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buffer[self.end..]) {
                Ok(0) => {
                    self.exhausted = true;
                    return;
                }
                Ok(n) => {
                    self.end += n;
                    trace!(bytes = n, buffered = self.end, "refilled source buffer");
                    return;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.report_error(&format!("io error: {}", err));
                    self.exhausted = true;
                    return;
                }
            }
        }
    }

    /// Skips `width` undecodable bytes at the cursor.
    fn skip(&mut self, width: usize) {
        if self.literal.is_some() {
            self.holes.push(self.current..self.current + width);
        }
        self.current += width;
        self.position.skip(width);
    }

    fn decode(&mut self) -> Option<char> {
        loop {
            self.previous = Some(Checkpoint::new(self.current, self.position));

            if !self.ensure(1) {
                return None;
            }

            let lead = self.buffer[self.current];

            if lead == 0 {
                self.report_error("invalid NUL byte");
                self.skip(1);
                continue;
            }

            if lead.is_ascii() {
                let ch = char::from(lead);
                self.current += 1;
                self.position.advance(ch, 1);
                return Some(ch);
            }

            let width = utf8_width(lead);
            self.ensure(width);
            let width = width.min(self.available());
            let bytes = &self.buffer[self.current..self.current + width];

            match std::str::from_utf8(bytes) {
                Ok(text) => {
                    if let Some(ch) = text.chars().next() {
                        self.current += width;
                        self.position.advance(ch, width);
                        return Some(ch);
                    }
                }
                Err(err) => {
                    let bad = err.error_len().unwrap_or(width).max(1);
                    self.report_error("invalid UTF-8 encoding");
                    self.skip(bad);
                }
            }
        }
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 1 for a byte
/// that cannot start one.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

impl<R, D> CharSource for ByteSource<R, D>
where
    R: Read,
    D: DiagnosticSink,
{
    fn next_char(&mut self) -> Option<char> {
        self.decode()
    }

    fn pushback(&mut self) {
        let Some(checkpoint) = self.previous.take() else {
            panic!("pushback called twice without an intervening read");
        };
        self.current = checkpoint.index();
        self.position = checkpoint.position();
    }

    fn position(&self) -> Position {
        self.position
    }

    fn start_literal(&mut self) {
        assert!(
            self.literal.is_none(),
            "literal region started while another is open"
        );
        self.literal = Some(self.current);
        self.holes.clear();
    }

    fn stop_literal(&mut self) -> String {
        let Some(start) = self.literal.take() else {
            panic!("literal region stopped without being started");
        };

        let mut text = String::with_capacity(self.current - start);
        let mut from = start;
        for hole in self.holes.drain(..) {
            text.push_str(&String::from_utf8_lossy(&self.buffer[from..hole.start]));
            from = hole.end;
        }
        text.push_str(&String::from_utf8_lossy(&self.buffer[from..self.current]));
        text
    }

    fn report_error(&mut self, message: &str) {
        debug!(
            line = self.position.line,
            column = self.position.column,
            reason = message,
            "diagnostic"
        );
        self.sink.report(Diagnostic::at(self.position, message));
    }
}
