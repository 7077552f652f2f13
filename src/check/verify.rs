use std::{fs, path::Path};

use regex::Regex;

use crate::lib::errors::CheckError;

/// Read `path` as text and report whether `pattern` matches anywhere in it.
///
/// An absent marker is `Ok(false)`. Open/read failures and non-UTF-8 content
/// are `CheckError::Read`.
pub fn pattern_present(path: &Path, pattern: &Regex) -> Result<bool, CheckError> {
    let text = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(pattern.is_match(&text))
}
