use crate::variable_set::VariableSet;
use std::io::Read;
use tracing::debug;
use varfile_common::{Diagnostic, DiagnosticSink};
use varfile_lexer::{ByteSource, LineScanner, DEFAULT_CAPACITY};

/// Drives a [`LineScanner`] over one input and collects its records.
///
/// Decoding never stops early: malformed lines are reported to the sink
/// and every well-formed line still ends up in the result. Callers decide
/// whether a non-empty sink is fatal.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    capacity: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the initial read buffer size.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn decode<R, D>(&self, reader: R, sink: D) -> VariableSet
    where
        R: Read,
        D: DiagnosticSink,
    {
        let source = ByteSource::with_capacity(reader, CountingSink::new(sink), self.capacity);
        let mut scanner = LineScanner::new(source);
        let mut vars = VariableSet::new();

        while !scanner.is_done() {
            vars.insert(scanner.key(), scanner.value());
            scanner.advance();
        }

        let reported = scanner.into_source().into_sink().count;
        debug!(variables = vars.len(), diagnostics = reported, "decoded variables");
        vars
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a variables file from `reader` with the default buffer size.
pub fn decode<R, D>(reader: R, sink: D) -> VariableSet
where
    R: Read,
    D: DiagnosticSink,
{
    Decoder::new().decode(reader, sink)
}

/// Decodes a variables file held in memory.
pub fn decode_str<D: DiagnosticSink>(input: &str, sink: D) -> VariableSet {
    decode(input.as_bytes(), sink)
}

struct CountingSink<D> {
    inner: D,
    count: usize,
}

impl<D> CountingSink<D> {
    fn new(inner: D) -> Self {
        Self { inner, count: 0 }
    }
}

impl<D: DiagnosticSink> DiagnosticSink for CountingSink<D> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        self.inner.report(diagnostic);
    }
}
