//! Canonical serializer: one `key = value` line per variable, in key order.
//!
//! Anything written here decodes back to the same set. Entries the line
//! grammar cannot express are rejected instead of being written lossily.

use crate::error::{Result, VarfileError};
use crate::variable_set::VariableSet;
use std::io::Write;
use varfile_lexer::is_key_char;

/// Writes `vars` to `writer` in canonical form.
///
/// Every entry is checked before anything is written, so an unencodable
/// entry leaves `writer` untouched.
pub fn encode<W: Write>(vars: &VariableSet, mut writer: W) -> Result<()> {
    let text = to_canonical_string(vars)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders `vars` in canonical form.
pub fn to_canonical_string(vars: &VariableSet) -> Result<String> {
    let mut out = String::new();
    for (key, value) in vars.iter() {
        check_encodable(key, value)?;
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}

fn check_encodable(key: &str, value: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("key is empty")
    } else if !key.chars().all(is_key_char) {
        Some("key contains characters outside [A-Za-z0-9_-]")
    } else if value.contains('\n') {
        Some("value contains a newline")
    } else if value.starts_with([' ', '\t']) {
        Some("value starts with whitespace")
    } else if value.contains('\0') {
        Some("value contains a NUL character")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(VarfileError::Unencodable {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
