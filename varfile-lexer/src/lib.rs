//! Streaming lexer for variables files.
//!
//! [`ByteSource`] turns a byte stream into decoded characters with
//! one-character pushback and literal capture; [`LineScanner`] runs the
//! line grammar over it and yields one [`Record`] per assignment line.

pub mod scanner;
pub mod source;
pub mod traits;

pub use scanner::{is_key_char, LineScanner, Record, Scan};
pub use source::{ByteSource, DEFAULT_CAPACITY};
pub use traits::CharSource;
pub use varfile_common::{Diagnostic, DiagnosticSink, Diagnostics, Position};
