use crate::Position;
use std::fmt;

/// A non-fatal problem found while reading a variables file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates a diagnostic located at `position`.
    pub fn at(position: Position, message: impl Into<String>) -> Self {
        Self::new(position.line, position.column, message)
    }

    /// Renders the diagnostic prefixed with the identifier of its input,
    /// e.g. `vars.txt,2:0 - unexpected token %`.
    pub fn with_source(&self, source: &str) -> String {
        format!("{},{}", source, self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} - {}", self.line, self.column, self.message)
    }
}

/// Receives diagnostics as they are produced.
///
/// Scanning never stops on a diagnostic; the sink decides what to do
/// with it.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Ordered collection of diagnostics. Empty means success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Turns the collected diagnostics into an error tagged with `source`,
    /// or `Ok(())` when nothing was reported.
    pub fn into_result(self, source: impl Into<String>) -> Result<(), DiagnosticReport> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(DiagnosticReport::new(source, self.items))
        }
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// All diagnostics of one input, tagged with the input's identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render(.origin, .diagnostics))]
pub struct DiagnosticReport {
    origin: String,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn new(source: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            origin: source.into(),
            diagnostics,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.origin
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// One formatted line per diagnostic.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.diagnostics
            .iter()
            .map(|d| d.with_source(&self.origin))
    }
}

fn render(source: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.with_source(source))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let diag = Diagnostic::new(2, 0, "unexpected token %");
        assert_eq!(diag.to_string(), "2:0 - unexpected token %");
        assert_eq!(diag.with_source("vars.txt"), "vars.txt,2:0 - unexpected token %");
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::new(1, 0, "a"));
        (&mut sink).report(Diagnostic::new(1, 1, "b"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].message, "b");
    }

    #[test]
    fn test_empty_diagnostics_is_success() {
        assert!(Diagnostics::new().into_result("x").is_ok());
    }

    #[test]
    fn test_report_renders_every_line() {
        let mut diags = Diagnostics::new();
        diags.report(Diagnostic::new(2, 0, "unexpected token %"));
        diags.report(Diagnostic::new(5, 3, "invalid NUL byte"));

        let report = diags.into_result("conf/vars").unwrap_err();
        assert_eq!(report.source_id(), "conf/vars");
        assert_eq!(
            report.to_string(),
            "conf/vars,2:0 - unexpected token %\nconf/vars,5:3 - invalid NUL byte"
        );
        assert_eq!(report.lines().count(), 2);
    }
}
