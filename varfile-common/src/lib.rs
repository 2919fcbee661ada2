//! Common Framework
//!
//! 提供 varfile-lexer 和 varfile-decoder 之间的共同组件：位置、检查点与诊断信息。

pub mod checkpoint;
pub mod diagnostic;
pub mod position;

pub use checkpoint::Checkpoint;
pub use diagnostic::{Diagnostic, DiagnosticReport, DiagnosticSink, Diagnostics};
pub use position::Position;
