// SPDX-License-Identifier: Apache-2.0

use core::ops::Deref;
use core::str::FromStr;

/// Fixed-capacity, stack-allocated destination for an extracted field value.
///
/// Holds at most `N - 1` value bytes followed by a NUL terminator, so the
/// contents can be handed to C-style consumers unchanged. A zero-capacity
/// buffer is rejected at compile time.
///
/// After an [`ExtractError::Truncated`](crate::ExtractError::Truncated)
/// result the buffer holds the leading `N - 1` bytes of the value.
#[derive(Clone)]
pub struct FieldBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FieldBuffer<N> {
    const NON_EMPTY: () = assert!(N > 0, "FieldBuffer needs room for the NUL terminator");

    /// Number of value bytes the buffer can hold, not counting the terminator.
    pub const DATA_CAPACITY: usize = N.saturating_sub(1);

    /// Creates an empty buffer.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Total size in bytes, including the terminator slot.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The extracted value, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or(&[])
    }

    /// The extracted value followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.bytes.get(..=self.len).unwrap_or(&[])
    }

    /// The extracted value as text. Values are copied byte for byte, so a
    /// truncated multi-byte character can make this fail.
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Parse the value with the caller's choice of parser, e.g. `f32` or `u16`.
    /// Returns `None` if the value is not UTF-8 or does not parse.
    pub fn parse<T: FromStr>(&self) -> Option<T> {
        self.as_str().ok()?.parse().ok()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.terminate(0);
    }

    /// Replaces the contents with as much of `value` as fits and returns the
    /// number of bytes copied.
    pub(crate) fn write_value(&mut self, value: &[u8]) -> usize {
        let copied = value.len().min(Self::DATA_CAPACITY);
        if let (Some(dst), Some(src)) = (self.bytes.get_mut(..copied), value.get(..copied)) {
            dst.copy_from_slice(src);
        }
        self.terminate(copied);
        copied
    }

    fn terminate(&mut self, len: usize) {
        if let Some(slot) = self.bytes.get_mut(len) {
            *slot = 0;
            self.len = len;
        }
    }
}

impl<const N: usize> Default for FieldBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for FieldBuffer<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl<const N: usize> AsRef<[u8]> for FieldBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> core::fmt::Debug for FieldBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldBuffer")
            .field("capacity", &N)
            .field(
                "value",
                &format_args!("\"{}\"", self.as_bytes().escape_ascii()),
            )
            .finish()
    }
}

impl<const N: usize> core::fmt::Display for FieldBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_bytes().escape_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty_and_terminated() {
        let buf = FieldBuffer::<8>::new();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 8);
        assert_eq!(FieldBuffer::<8>::DATA_CAPACITY, 7);
        assert_eq!(buf.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_write_value_fits() {
        let mut buf = FieldBuffer::<8>::new();
        assert_eq!(buf.write_value(b"22.5"), 4);
        assert_eq!(buf.as_bytes(), b"22.5");
        assert_eq!(buf.as_bytes_with_nul(), b"22.5\0");
        assert_eq!(buf.as_str(), Ok("22.5"));
    }

    #[test]
    fn test_write_value_clips_to_data_capacity() {
        let mut buf = FieldBuffer::<4>::new();
        assert_eq!(buf.write_value(b"123456789"), 3);
        assert_eq!(buf.as_bytes_with_nul(), b"123\0");
    }

    #[test]
    fn test_shorter_value_replaces_longer() {
        let mut buf = FieldBuffer::<16>::new();
        buf.write_value(b"1013.25");
        buf.write_value(b"65");
        assert_eq!(buf.as_bytes_with_nul(), b"65\0");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_single_byte_buffer_holds_only_terminator() {
        let mut buf = FieldBuffer::<1>::new();
        assert_eq!(buf.write_value(b"abc"), 0);
        assert_eq!(buf.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_parse_with_caller_parser() {
        let mut buf = FieldBuffer::<16>::new();
        buf.write_value(b"-122.4194");
        assert_eq!(buf.parse::<f64>(), Some(-122.4194));
        assert_eq!(buf.parse::<i32>(), None);

        buf.write_value(b"1013");
        assert_eq!(buf.parse::<u16>(), Some(1013));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let mut buf = FieldBuffer::<4>::new();
        buf.write_value(&[0xC3]);
        assert!(buf.as_str().is_err());
        assert_eq!(buf.parse::<u8>(), None);
    }

    #[test]
    fn test_display_escapes_non_ascii() {
        let mut buf = FieldBuffer::<8>::new();
        buf.write_value(b"\"hot\"");
        assert_eq!(format!("{}", buf), "\\\"hot\\\"");
        assert_eq!(&*buf, b"\"hot\"");
    }
}
