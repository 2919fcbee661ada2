use crate::decoder::decode;
use crate::error::{Result, VarfileError};
use crate::variable_set::VariableSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;
use varfile_common::Diagnostics;

/// Loads a variables file, failing if any line could not be decoded.
///
/// The error carries every diagnostic, each tagged with `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<VariableSet> {
    let path = path.as_ref();
    let (vars, diags) = load_file_lenient(path)?;
    diags.into_result(path.display().to_string())?;
    Ok(vars)
}

/// Loads a variables file and returns whatever decoded, together with the
/// diagnostics. Only a failure to open the file is an error.
pub fn load_file_lenient(path: impl AsRef<Path>) -> Result<(VariableSet, Diagnostics)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VarfileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut diags = Diagnostics::new();
    let vars = decode(BufReader::new(file), &mut diags);
    info!(
        path = %path.display(),
        variables = vars.len(),
        diagnostics = diags.len(),
        "loaded variables file"
    );
    Ok((vars, diags))
}

/// Parses a directly supplied `key=value` assignment.
///
/// The split happens at the first `=`, so the value may itself contain
/// `=`. The key is taken as given.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(VarfileError::InvalidAssignment(input.to_string())),
    }
}
