// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Scans a JSON number at the start of `bytes` without consuming anything.
///
/// Accepts an optional `-`, then either `0` or a non-zero digit followed by
/// digits, then an optional `.` with at least one digit. Exponents are not
/// part of the accepted grammar: scanning stops before an `e`/`E`.
///
/// Returns the length of the number text.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let at = |i: usize| bytes.get(i).copied().unwrap_or(b'\0');
    let mut p = 0;

    if at(p) == b'-' {
        p += 1;
    }

    match at(p) {
        b'0' => p += 1,
        b'1'..=b'9' => {
            p += 1;
            while at(p).is_ascii_digit() {
                p += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }

    if at(p) == b'.' {
        p += 1;
        if !at(p).is_ascii_digit() {
            return Err(ParseError::InvalidValue);
        }
        while at(p).is_ascii_digit() {
            p += 1;
        }
    }

    Ok(p)
}

/// Converts scanned number text to an `f64`.
///
/// A result that overflows to infinity is reported as `NumberTooBig`.
pub fn convert_number(text: &[u8]) -> Result<f64, ParseError> {
    let text = core::str::from_utf8(text).map_err(|_| ParseError::InvalidValue)?;
    let n: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

/// Scans and converts the number at the start of `bytes`.
///
/// Returns the value together with the length of its text.
pub fn parse_number(bytes: &[u8]) -> Result<(f64, usize), ParseError> {
    let len = scan_number(bytes)?;
    let n = convert_number(&bytes[..len])?;
    Ok((n, len))
}
