// SPDX-License-Identifier: Apache-2.0

//! Substring-based field extraction for flat JSON objects.
//!
//! No JSON grammar is applied: the extractor finds the first literal
//! occurrence of a needle and copies whatever follows it up to the next `,`
//! or `}`. This is enough for fixed-layout payloads whose producer is under
//! the same control as the consumer. It is not a validating parser:
//!
//! - a needle that also occurs inside an earlier key or value matches there;
//! - nested objects, arrays and quoted strings come back as raw text,
//!   brackets and quotes included, cut at the first `,` or `}`.

use crate::byte_cursor::{until_nul, ByteCursor};
use crate::needle::Needle;
use crate::{ExtractError, FieldBuffer};

fn is_value_end(byte: u8) -> bool {
    byte == b',' || byte == b'}'
}

/// Extracts the value that follows a literal `needle` in `text`.
///
/// `text` ends at its first NUL byte or at the end of the slice. After the
/// needle, any ASCII spaces are skipped (tabs and newlines are not), then
/// bytes are copied into `out` up to the next `,` or `}`.
///
/// Returns the number of bytes copied.
///
/// # Errors
/// * [`ExtractError::KeyMissing`] if `needle` does not occur in `text`; `out`
///   is left untouched.
/// * [`ExtractError::Malformed`] if nothing was copied, e.g. `{"x":}`.
/// * [`ExtractError::Truncated`] if the value is longer than `N - 1` bytes;
///   `out` holds the first `N - 1` bytes.
pub fn extract_field_raw<T, P, const N: usize>(
    text: &T,
    needle: &P,
    out: &mut FieldBuffer<N>,
) -> Result<usize, ExtractError>
where
    T: AsRef<[u8]> + ?Sized,
    P: AsRef<[u8]> + ?Sized,
{
    scan_value(until_nul(text.as_ref()), until_nul(needle.as_ref()), out)
}

/// Extracts the value of `key` from a flat JSON object.
///
/// The needle `"<key>":` is built on the stack and handed to
/// [`extract_field_raw`], whose outcomes are returned unchanged.
///
/// ```
/// use packet_atoms::{extract_field, FieldBuffer};
///
/// let mut temp = FieldBuffer::<16>::new();
/// extract_field(r#"{"temp":22.5,"hum":65}"#, "temp", &mut temp).unwrap();
/// assert_eq!(temp.as_bytes(), b"22.5");
/// ```
///
/// # Errors
/// [`ExtractError::Malformed`] without looking at `text` if `key` is longer
/// than [`MAX_KEY_LEN`](crate::MAX_KEY_LEN) bytes; otherwise as for
/// [`extract_field_raw`].
pub fn extract_field<T, K, const N: usize>(
    text: &T,
    key: &K,
    out: &mut FieldBuffer<N>,
) -> Result<usize, ExtractError>
where
    T: AsRef<[u8]> + ?Sized,
    K: AsRef<[u8]> + ?Sized,
{
    let needle = Needle::for_key(key.as_ref()).ok_or(ExtractError::Malformed)?;
    scan_value(until_nul(text.as_ref()), needle.as_bytes(), out)
}

fn scan_value<const N: usize>(
    text: &[u8],
    needle: &[u8],
    out: &mut FieldBuffer<N>,
) -> Result<usize, ExtractError> {
    let mut cursor = ByteCursor::new(text);

    let Some(key_pos) = cursor.find(needle) else {
        log::trace!("needle \"{}\" not found", needle.escape_ascii());
        return Err(ExtractError::KeyMissing);
    };
    cursor.advance(key_pos + needle.len());
    cursor.skip_while(|b| b == b' ');

    let value_pos = cursor.current_pos();
    let value = cursor.take_while(|b| !is_value_end(b));
    let copied = out.write_value(value);

    if copied == 0 {
        log::trace!("empty value at offset {}", value_pos);
        return Err(ExtractError::Malformed);
    }
    if copied < value.len() {
        log::trace!(
            "value of {} bytes truncated to {} at offset {}",
            value.len(),
            copied,
            value_pos
        );
        return Err(ExtractError::Truncated);
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_raw_needle() {
        let mut out = FieldBuffer::<16>::new();
        assert_eq!(
            extract_field_raw(r#"{"temp":22.5}"#, r#""temp":"#, &mut out),
            Ok(4)
        );
        assert_eq!(out.as_bytes(), b"22.5");
    }

    #[test]
    fn test_raw_needle_need_not_be_a_key() {
        let mut out = FieldBuffer::<16>::new();
        assert_eq!(extract_field_raw("id=7,x=1", "id=", &mut out), Ok(1));
        assert_eq!(out.as_bytes(), b"7");
    }

    #[test]
    fn test_key_missing_leaves_buffer_untouched() {
        let mut out = FieldBuffer::<16>::new();
        extract_field(r#"{"a":1}"#, "a", &mut out).unwrap();
        assert_eq!(
            extract_field(r#"{"a":1}"#, "b", &mut out),
            Err(ExtractError::KeyMissing)
        );
        assert_eq!(out.as_bytes(), b"1");
    }

    #[test]
    fn test_empty_value_clears_buffer() {
        let mut out = FieldBuffer::<16>::new();
        extract_field(r#"{"a":1}"#, "a", &mut out).unwrap();
        assert_eq!(
            extract_field(r#"{"a":}"#, "a", &mut out),
            Err(ExtractError::Malformed)
        );
        assert_eq!(out.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_value_at_end_of_text() {
        let mut out = FieldBuffer::<16>::new();
        assert_eq!(extract_field(r#"{"a":123"#, "a", &mut out), Ok(3));
        assert_eq!(out.as_bytes(), b"123");
        assert_eq!(
            extract_field(r#"{"a":"#, "a", &mut out),
            Err(ExtractError::Malformed)
        );
    }

    #[test]
    fn test_text_ends_at_nul() {
        let mut out = FieldBuffer::<16>::new();
        assert_eq!(extract_field(b"{\"a\":12\0,junk}", "a", &mut out), Ok(2));
        assert_eq!(out.as_bytes(), b"12");
        assert_eq!(
            extract_field(b"{\"a\":1}\0{\"b\":2}", "b", &mut out),
            Err(ExtractError::KeyMissing)
        );
    }

    #[test]
    fn test_exact_fit_is_not_truncation() {
        let mut out = FieldBuffer::<4>::new();
        assert_eq!(extract_field(r#"{"x":123}"#, "x", &mut out), Ok(3));
        assert_eq!(out.as_bytes_with_nul(), b"123\0");
    }

    #[test]
    fn test_truncation_keeps_prefix() {
        let mut out = FieldBuffer::<4>::new();
        assert_eq!(
            extract_field(r#"{"x":1234}"#, "x", &mut out),
            Err(ExtractError::Truncated)
        );
        assert_eq!(out.as_bytes_with_nul(), b"123\0");
    }

    #[test]
    fn test_single_byte_buffer_reports_malformed() {
        let mut out = FieldBuffer::<1>::new();
        assert_eq!(
            extract_field(r#"{"x":5}"#, "x", &mut out),
            Err(ExtractError::Malformed)
        );
    }

    #[test]
    fn test_oversized_key_skips_scan() {
        let key = [b'k'; crate::MAX_KEY_LEN + 1];
        let mut out = FieldBuffer::<8>::new();
        assert_eq!(
            extract_field("", &key[..], &mut out),
            Err(ExtractError::Malformed)
        );
    }
}
