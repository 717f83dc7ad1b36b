// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;
use core::ops::Deref;

/// Owned string payload of a [`Value`](crate::Value).
///
/// Holds raw bytes with an explicit length, so embedded NUL bytes are kept.
/// The storage always carries one extra trailing NUL that is not part of the
/// content, for handing the bytes to C-style consumers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JsonString {
    // Invariant: non-empty, last byte is 0.
    bytes: Vec<u8>,
}

impl JsonString {
    /// Copies `content` into a new string.
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(content.len() + 1);
        bytes.extend_from_slice(content);
        bytes.push(0);
        Self { bytes }
    }

    /// The content bytes, without the trailing NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The content bytes followed by the internal NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of content bytes.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content as text, if it is valid UTF-8.
    ///
    /// The parser does not validate UTF-8, so this can fail on input that
    /// parsed successfully.
    pub fn to_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }
}

impl Deref for JsonString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for JsonString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for JsonString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.to_str() {
            Ok(s) => write!(f, "{s:?}"),
            Err(_) => write!(f, "{:?}", self.as_bytes()),
        }
    }
}
