// SPDX-License-Identifier: Apache-2.0

//! Lookup of a single record in a packed `[tag:1][len:1][value:len]` stream.

use crate::byte_cursor::ByteCursor;

/// Tag byte plus length byte.
pub const TLV_HEADER_LEN: usize = 2;

/// Finds the first record tagged `tag` and returns its value.
///
/// Records are walked from the start of `buffer`. The returned slice borrows
/// from `buffer` and its length is the record's declared length.
///
/// `None` covers both an absent tag and a record whose declared length runs
/// past the end of `buffer`; the walk stops at the first such record, since
/// nothing after it can be located reliably. No byte outside `buffer` is ever
/// read, whatever the length bytes claim.
///
/// ```
/// use packet_atoms::find_tlv_record;
///
/// let frame = [0x01, 0x04, 0xAA, 0xBB, 0xCC, 0xDD, 0x02, 0x02, 0x11, 0x22];
/// assert_eq!(find_tlv_record(&frame, 0x02), Some(&[0x11, 0x22][..]));
/// assert_eq!(find_tlv_record(&frame, 0x99), None);
/// ```
pub fn find_tlv_record(buffer: &[u8], tag: u8) -> Option<&[u8]> {
    let mut cursor = ByteCursor::new(buffer);

    loop {
        let &[record_tag, declared_len] = cursor.peek(TLV_HEADER_LEN)? else {
            return None;
        };
        let value_start = cursor.current_pos() + TLV_HEADER_LEN;
        let value_end = value_start + usize::from(declared_len);

        let Some(value) = cursor.slice(value_start, value_end) else {
            log::trace!(
                "record tag {:#04x} at offset {} claims {} bytes, only {} remain",
                record_tag,
                cursor.current_pos(),
                declared_len,
                buffer.len().saturating_sub(value_start)
            );
            return None;
        };

        if record_tag == tag {
            return Some(value);
        }
        cursor.advance(TLV_HEADER_LEN + value.len());
    }
}
