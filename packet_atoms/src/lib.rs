// SPDX-License-Identifier: Apache-2.0

//! Allocation-free value extraction for two fixed wire formats:
//!
//! - flat JSON objects with a known field layout, via [`extract_field`] and
//!   [`extract_field_raw`];
//! - packed `[tag:1][len:1][value:len]` binary records, via
//!   [`find_tlv_record`].
//!
//! Nothing here allocates, recurses or blocks. Extracted JSON values are
//! copied into a caller-owned [`FieldBuffer`]; TLV values are borrowed
//! straight out of the input.

#![cfg_attr(not(test), no_std)]

mod byte_cursor;

mod extract_error;
pub use extract_error::ExtractError;

mod field_buffer;
pub use field_buffer::FieldBuffer;

mod needle;
pub use needle::{MAX_KEY_LEN, NEEDLE_CAPACITY};

mod field;
pub use field::{extract_field, extract_field_raw};

mod tlv;
pub use tlv::{find_tlv_record, TLV_HEADER_LEN};
