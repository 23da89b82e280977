// SPDX-License-Identifier: Apache-2.0

use crate::byte_cursor::until_nul;

/// Size of the stack buffer a key-derived needle is built in. One byte is
/// kept back for a terminator so the layout matches C producers.
pub const NEEDLE_CAPACITY: usize = 64;

/// Longest key name [`extract_field`](crate::extract_field) accepts: the
/// needle capacity minus two quotes, a colon and the terminator.
pub const MAX_KEY_LEN: usize = NEEDLE_CAPACITY - 4;

/// A `"<key>":` search pattern staged on the stack.
pub(crate) struct Needle {
    bytes: [u8; NEEDLE_CAPACITY],
    len: usize,
}

impl Needle {
    /// Builds the needle for a bare key name. The key ends at its first NUL.
    /// Returns `None` if the key is longer than [`MAX_KEY_LEN`].
    pub fn for_key(key: &[u8]) -> Option<Self> {
        let key = until_nul(key);
        if key.len() > MAX_KEY_LEN {
            log::trace!(
                "key of {} bytes exceeds the {} byte limit",
                key.len(),
                MAX_KEY_LEN
            );
            return None;
        }

        let mut bytes = [0u8; NEEDLE_CAPACITY];
        let decorated = b"\"".iter().chain(key).chain(b"\":");
        for (slot, &byte) in bytes.iter_mut().zip(decorated) {
            *slot = byte;
        }

        Some(Self {
            bytes,
            len: key.len() + 3,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or(&[])
    }
}
