//! Conversion of untyped external input (command-line tokens, text files)
//! into an integer sequence. This is the only place where an
//! `InvalidInput` error can be produced.

use crate::{error::PairSumError, pair::Value};
use log::debug;
use std::{fs, path::Path};

/// Parse every token as an integer. Surrounding whitespace is ignored.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Value>, PairSumError> {
    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            let token = token.as_ref().trim();
            token.parse::<Value>().map_err(|e| {
                PairSumError::invalid_input(format!(
                    "element {idx} ('{token}') is not an integer: {e}"
                ))
            })
        })
        .collect()
}

/// Parse one integer per line, skipping blank lines.
pub fn parse_lines(text: &str) -> Result<Vec<Value>, PairSumError> {
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value = line.parse::<Value>().map_err(|e| {
            PairSumError::invalid_input(format!(
                "line {} ('{line}') is not an integer: {e}",
                line_no + 1
            ))
        })?;
        values.push(value);
    }

    Ok(values)
}

pub fn read_file(path: &Path) -> Result<Vec<Value>, PairSumError> {
    let text = fs::read_to_string(path)?;
    let values = parse_lines(&text)?;
    debug!("read {} integers from {}", values.len(), path.display());

    Ok(values)
}
