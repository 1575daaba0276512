//! Text forms of codewords
//!
//! Codewords are accepted either as a hex string (`40454657...`, optionally
//! `0x`-prefixed) or as decimal byte values separated by commas and/or
//! whitespace (`64, 69, 70, 87 ...`).
//!
//! [`InputFormat::Auto`] picks decimal when the text contains a separator and
//! hex otherwise, so a lone `255` is the two bytes `02 55` and `40 45` is two
//! decimal bytes. [`InputFormat::Hex`] and [`InputFormat::Decimal`] force one
//! reading.

use thiserror::Error;

/// Errors from parsing a codeword line
#[derive(Debug, Error)]
pub enum CodewordParseError {
    #[error("Empty codeword")]
    Empty,

    #[error("Invalid hex codeword: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid byte value {value:?} at index {index}")]
    InvalidByte { index: usize, value: String },
}

/// How codeword text is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Auto,
    /// Hex digits; commas and whitespace between them are ignored
    Hex,
    Decimal,
}

impl InputFormat {
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        match matches.get_one::<String>("input-format").map(String::as_str) {
            Some("hex") => InputFormat::Hex,
            Some("decimal") => InputFormat::Decimal,
            _ => InputFormat::Auto,
        }
    }
}

/// How codewords are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Hex,
    Decimal,
}

pub fn parse_codeword(input: &str) -> Result<Vec<u8>, CodewordParseError> {
    parse_codeword_as(input, InputFormat::Auto)
}

pub fn parse_codeword_as(input: &str, format: InputFormat) -> Result<Vec<u8>, CodewordParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CodewordParseError::Empty);
    }

    match format {
        InputFormat::Decimal => parse_decimal(input),
        InputFormat::Auto if is_decimal_list(input) => parse_decimal(input),
        InputFormat::Auto => parse_hex(input),
        InputFormat::Hex => parse_hex(input),
    }
}

/// Decimal lists have a separator; a lone run of digits is read as hex
fn is_decimal_list(input: &str) -> bool {
    input.contains(|c: char| c == ',' || c.is_whitespace())
}

fn parse_hex(input: &str) -> Result<Vec<u8>, CodewordParseError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let digits: String = digits
        .chars()
        .filter(|&c| c != ',' && !c.is_whitespace())
        .collect();
    if digits.is_empty() {
        return Err(CodewordParseError::Empty);
    }
    Ok(hex::decode(digits)?)
}

fn parse_decimal(input: &str) -> Result<Vec<u8>, CodewordParseError> {
    let bytes = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<u8>()
                .map_err(|_| CodewordParseError::InvalidByte {
                    index,
                    value: token.to_string(),
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if bytes.is_empty() {
        return Err(CodewordParseError::Empty);
    }
    Ok(bytes)
}

pub fn format_codeword(codeword: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => hex::encode(codeword),
        OutputFormat::Decimal => codeword
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(","),
    }
}
