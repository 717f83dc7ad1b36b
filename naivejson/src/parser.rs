// SPDX-License-Identifier: Apache-2.0

use crate::number_parser;
use crate::parse_error::ParseError;
use crate::scratch_stack::{ScratchStack, DEFAULT_STACK_INIT_SIZE};
use crate::value::Value;

/// Per-call parse state: a cursor into the input and the scratch stack
/// used for string content.
///
/// The input is treated as terminated by its end or by the first NUL byte,
/// whichever comes first.
struct Context<'a> {
    json: &'a [u8],
    pos: usize,
    stack: ScratchStack,
}

impl<'a> Context<'a> {
    fn new(json: &'a [u8], stack_init_size: usize) -> Self {
        Self {
            json,
            pos: 0,
            stack: ScratchStack::with_init_size(stack_init_size),
        }
    }

    /// Byte `offset` positions past the cursor, or NUL past the end.
    fn byte_at(&self, offset: usize) -> u8 {
        self.pos
            .checked_add(offset)
            .and_then(|i| self.json.get(i))
            .copied()
            .unwrap_or(b'\0')
    }

    fn peek(&self) -> u8 {
        self.byte_at(0)
    }

    fn rest(&self) -> &'a [u8] {
        self.json.get(self.pos..).unwrap_or(&[])
    }

    /// Consumes a byte the dispatcher has already matched.
    fn expect(&mut self, ch: u8) {
        debug_assert_eq!(self.peek(), ch);
        self.pos += 1;
    }

    fn parse_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.pos += 1;
        }
    }

    /// Parses `literal`, whose first byte is already known to be under the
    /// cursor, and stores `result` on success.
    fn parse_literal(
        &mut self,
        v: &mut Value,
        literal: &[u8],
        result: Value,
    ) -> Result<(), ParseError> {
        self.expect(literal[0]);
        let suffix = &literal[1..];
        for (i, &expected) in suffix.iter().enumerate() {
            if self.byte_at(i) != expected {
                return Err(ParseError::InvalidValue);
            }
        }
        self.pos += suffix.len();
        *v = result;
        Ok(())
    }

    fn parse_number(&mut self, v: &mut Value) -> Result<(), ParseError> {
        let (n, len) = number_parser::parse_number(self.rest())?;
        *v = Value::Number(n);
        self.pos += len;
        Ok(())
    }

    fn parse_string(&mut self, v: &mut Value) -> Result<(), ParseError> {
        let head = self.stack.len();
        self.expect(b'"');
        loop {
            let ch = self.peek();
            self.pos += 1;
            match ch {
                b'"' => {
                    let len = self.stack.len() - head;
                    v.set_string(self.stack.pop(len));
                    return Ok(());
                }
                b'\0' => {
                    self.stack.truncate(head);
                    return Err(ParseError::MissQuotationMark);
                }
                _ => self.stack.push_byte(ch),
            }
        }
    }

    fn parse_value(&mut self, v: &mut Value) -> Result<(), ParseError> {
        match self.peek() {
            b't' => self.parse_literal(v, b"true", Value::True),
            b'f' => self.parse_literal(v, b"false", Value::False),
            b'n' => self.parse_literal(v, b"null", Value::Null),
            b'"' => self.parse_string(v),
            b'\0' => Err(ParseError::ExpectValue),
            _ => self.parse_number(v),
        }
    }

    fn parse_document(&mut self, v: &mut Value) -> Result<(), ParseError> {
        self.parse_whitespace();
        self.parse_value(v)?;
        self.parse_whitespace();
        if self.peek() != b'\0' {
            return Err(ParseError::RootNotSingular);
        }
        Ok(())
    }
}

/// Parses `input` as a single JSON scalar into `v`.
///
/// `v` is reset to `Null` first and stays `Null` on error. Leading and
/// trailing whitespace (space, tab, newline, carriage return) is allowed;
/// anything else after the value is an error.
///
/// # Example
/// ```
/// use naivejson::{parse, Value, ValueKind};
/// let mut v = Value::default();
/// parse(&mut v, " \"hello\" ").unwrap();
/// assert_eq!(v.kind(), ValueKind::String);
/// assert_eq!(v.string(), b"hello");
/// ```
pub fn parse<T: AsRef<[u8]> + ?Sized>(v: &mut Value, input: &T) -> Result<(), ParseError> {
    parse_with_stack_size(v, input, DEFAULT_STACK_INIT_SIZE)
}

/// Like [`parse`], with a custom initial size for the string scratch stack.
///
/// # Panics
/// If `stack_init_size` is smaller than 2.
pub fn parse_with_stack_size<T: AsRef<[u8]> + ?Sized>(
    v: &mut Value,
    input: &T,
    stack_init_size: usize,
) -> Result<(), ParseError> {
    let mut c = Context::new(input.as_ref(), stack_init_size);
    v.release();
    let ret = c.parse_document(v);
    if let Err(e) = ret {
        log::debug!("parse failed at byte {}: {}", c.pos, e);
        v.release();
    }
    assert!(
        c.stack.is_empty(),
        "scratch stack not drained: {} bytes left",
        c.stack.len()
    );
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;
    use test_log::test;

    fn parse_str(input: &str) -> (Result<(), ParseError>, Value) {
        let mut v = Value::True;
        let ret = parse(&mut v, input);
        (ret, v)
    }

    #[test]
    fn test_whitespace_skipper_is_idempotent() {
        let mut c = Context::new(b" \t\r\n x", DEFAULT_STACK_INIT_SIZE);
        c.parse_whitespace();
        assert_eq!(c.pos, 5);
        c.parse_whitespace();
        assert_eq!(c.pos, 5);
        assert_eq!(c.peek(), b'x');
    }

    #[test]
    fn test_byte_at_past_end_is_nul() {
        let c = Context::new(b"ab", DEFAULT_STACK_INIT_SIZE);
        assert_eq!(c.byte_at(1), b'b');
        assert_eq!(c.byte_at(2), b'\0');
        assert_eq!(c.byte_at(usize::MAX), b'\0');
    }

    #[test]
    fn test_literal_advances_past_literal() {
        let mut c = Context::new(b"false  ", DEFAULT_STACK_INIT_SIZE);
        let mut v = Value::Null;
        assert_eq!(c.parse_value(&mut v), Ok(()));
        assert_eq!(v, Value::False);
        assert_eq!(c.pos, 5);
    }

    #[test]
    fn test_number_advances_to_scan_end() {
        let mut c = Context::new(b"-12.5]", DEFAULT_STACK_INIT_SIZE);
        let mut v = Value::Null;
        assert_eq!(c.parse_value(&mut v), Ok(()));
        assert_eq!(v, Value::Number(-12.5));
        assert_eq!(c.peek(), b']');
    }

    #[test]
    fn test_string_leaves_stack_drained() {
        let mut c = Context::new(b"\"abc\"", DEFAULT_STACK_INIT_SIZE);
        let mut v = Value::Null;
        assert_eq!(c.parse_value(&mut v), Ok(()));
        assert_eq!(v.string(), b"abc");
        assert!(c.stack.is_empty());
        assert_eq!(c.stack.capacity(), DEFAULT_STACK_INIT_SIZE);
    }

    #[test]
    fn test_unterminated_string_rolls_back_stack() {
        let mut c = Context::new(b"\"abc", DEFAULT_STACK_INIT_SIZE);
        let mut v = Value::Null;
        assert_eq!(c.parse_value(&mut v), Err(ParseError::MissQuotationMark));
        assert!(c.stack.is_empty());
        assert_eq!(v, Value::Null);
    }

    #[test]
    fn test_error_resets_value_to_null() {
        let (ret, v) = parse_str("\"ok\" x");
        assert_eq!(ret, Err(ParseError::RootNotSingular));
        assert_eq!(v.kind(), ValueKind::Null);
    }

    #[test]
    fn test_nul_byte_ends_input() {
        let mut v = Value::Null;
        assert_eq!(parse(&mut v, b"true\0garbage"), Ok(()));
        assert_eq!(v, Value::True);
        assert_eq!(parse(&mut v, b"12\0"), Ok(()));
        assert_eq!(v, Value::Number(12.0));
        assert_eq!(
            parse(&mut v, b"\"ab\0cd\""),
            Err(ParseError::MissQuotationMark)
        );
        assert_eq!(parse(&mut v, b"\0"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_small_stack_grows_for_long_string() {
        let body = "x".repeat(1000);
        let input = format!("\"{}\"", body);
        let mut v = Value::Null;
        assert_eq!(parse_with_stack_size(&mut v, &input, 2), Ok(()));
        assert_eq!(v.string(), body.as_bytes());
    }
}
