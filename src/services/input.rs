use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}

impl InputError {
    pub fn code(&self) -> &'static str {
        match self {
            InputError::InvalidInteger(_) => "INVALID_INTEGER",
        }
    }
}

pub fn parse_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<i32>, InputError> {
    let mut out = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let num = token
            .parse::<i32>()
            .map_err(|_| InputError::InvalidInteger(token.to_string()))?;
        out.push(num);
    }
    Ok(out)
}

pub fn read_values_file(path: &Path) -> anyhow::Result<Vec<i32>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_tokens(
        raw.split(|c: char| c.is_whitespace() || c == ','),
    )?)
}

/// A `--file` source wins over positional values; clap already rejects
/// passing both.
pub fn gather_values(values: &[String], file: Option<&Path>) -> anyhow::Result<Vec<i32>> {
    match file {
        Some(path) => read_values_file(path),
        None => Ok(parse_tokens(values.iter().map(String::as_str))?),
    }
}
