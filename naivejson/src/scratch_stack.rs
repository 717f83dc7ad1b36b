// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Initial capacity of the scratch stack, allocated on the first push.
pub const DEFAULT_STACK_INIT_SIZE: usize = 256;

/// Growable byte stack used to accumulate string content while parsing.
///
/// Storage is allocated lazily. `size` is the allocated capacity and `top`
/// the logical length; bytes in `buf[top..size]` are scratch space.
/// When a push would make `top + n >= size`, the capacity grows by half of
/// itself until it no longer would, keeping the existing content.
#[derive(Debug)]
pub struct ScratchStack {
    buf: Vec<u8>,
    top: usize,
    init_size: usize,
}

impl ScratchStack {
    /// Creates an empty stack that allocates [`DEFAULT_STACK_INIT_SIZE`]
    /// bytes on first use.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_init_size(DEFAULT_STACK_INIT_SIZE)
    }

    /// Creates an empty stack with a custom first allocation size.
    ///
    /// # Panics
    /// If `init_size` is smaller than 2, since the growth step is half the
    /// current size and would never make progress.
    pub fn with_init_size(init_size: usize) -> Self {
        assert!(init_size >= 2, "scratch stack initial size must be at least 2");
        Self {
            buf: Vec::new(),
            top: 0,
            init_size,
        }
    }

    /// Logical length: bytes pushed and not yet popped.
    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Allocated size in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reserves `n` bytes at the top of the stack and returns them for
    /// writing.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        debug_assert!(n > 0);
        let needed = self.top.saturating_add(n);
        if needed >= self.buf.len() {
            let old_size = self.capacity();
            let mut size = if old_size == 0 {
                self.init_size
            } else {
                old_size
            };
            while needed >= size {
                size += size >> 1;
            }
            log::trace!("scratch stack grows from {} to {} bytes", old_size, size);
            self.buf.resize(size, 0);
        }
        let start = self.top;
        self.top = needed;
        &mut self.buf[start..needed]
    }

    /// Pushes a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.push(1)[0] = byte;
    }

    /// Removes the top `n` bytes and returns a view of them.
    ///
    /// # Panics
    /// If fewer than `n` bytes are on the stack.
    pub fn pop(&mut self, n: usize) -> &[u8] {
        assert!(
            self.top >= n,
            "scratch stack underflow: pop {} with {} bytes pushed",
            n,
            self.top
        );
        self.top -= n;
        &self.buf[self.top..self.top + n]
    }

    /// Rolls the logical length back to `head`, discarding everything pushed
    /// after it.
    pub fn truncate(&mut self, head: usize) {
        debug_assert!(head <= self.top);
        self.top = self.top.min(head);
    }
}
