//! Decoder for variables files.
//!
//! A variables file holds `key = value` lines, `#` comments and blank
//! lines:
//!
//! ```
//! use varfile_decoder::{decode_str, Diagnostics};
//!
//! let mut diags = Diagnostics::new();
//! let vars = decode_str("# deploy\nenv = prod\nreplicas=3\n", &mut diags);
//!
//! assert!(diags.is_empty());
//! assert_eq!(vars.get("env"), Some("prod"));
//! assert_eq!(vars.get("replicas"), Some("3"));
//! ```
//!
//! Malformed lines are reported and skipped; every good line is still
//! decoded.

pub mod decoder;
pub mod encode;
pub mod error;
pub mod load;
pub mod variable_set;

pub use decoder::{decode, decode_str, Decoder};
pub use encode::{encode, to_canonical_string};
pub use error::{Result, VarfileError};
pub use load::{load_file, load_file_lenient, parse_assignment};
pub use variable_set::{merge, VariableSet};
pub use varfile_common::{Diagnostic, DiagnosticReport, DiagnosticSink, Diagnostics};
