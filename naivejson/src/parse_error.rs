// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// Every variant is terminal: the parse call that produced it leaves the
/// output [`Value`](crate::Value) as `Null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A malformed literal or number, or a byte that cannot start a value.
    InvalidValue,
    /// A complete value was followed by more non-whitespace content.
    RootNotSingular,
    /// The number is well formed but does not fit in an `f64`.
    NumberTooBig,
    /// A string was opened but the input ended before its closing quote.
    MissQuotationMark,
}

impl ParseError {
    /// Short, stable name of the error, as shown by `Display`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root not singular",
            ParseError::NumberTooBig => "number too big",
            ParseError::MissQuotationMark => "missing closing quotation mark",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for ParseError {}
