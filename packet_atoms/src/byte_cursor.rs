// SPDX-License-Identifier: Apache-2.0

/// Returns the part of `bytes` before the first NUL byte, or all of it when
/// there is none. Text inputs and needles are C-style strings on the wire.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => bytes.get(..end).unwrap_or(bytes),
        None => bytes,
    }
}

/// A read position over a borrowed byte slice.
///
/// Every access is bounds-checked through `get`, so no input can make the
/// cursor panic or read outside `data`. Slices handed out borrow from the
/// original input, not from the cursor.
#[derive(Debug)]
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Bytes from the current position to the end of the data.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// The next `len` bytes, or `None` if fewer than `len` remain.
    pub fn peek(&self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        self.data.get(self.pos..end)
    }

    /// The bytes in `start..end`, or `None` if out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.data.get(start..end)
    }

    /// Moves forward by `len` bytes, stopping at the end of the data.
    pub fn advance(&mut self, len: usize) {
        self.pos = self.pos.saturating_add(len).min(self.data.len());
    }

    /// Position of the first occurrence of `needle` at or after the cursor.
    /// An empty needle matches immediately.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(self.pos);
        }
        self.remaining()
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|offset| self.pos + offset)
    }

    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        let skipped = self.remaining().iter().take_while(|&&b| pred(b)).count();
        self.advance(skipped);
    }

    /// Consumes and returns the longest run of bytes matching `pred`.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let rest = self.remaining();
        let run = rest.iter().take_while(|&&b| pred(b)).count();
        self.advance(run);
        rest.get(..run).unwrap_or(&[])
    }
}
