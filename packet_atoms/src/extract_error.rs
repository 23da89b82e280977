// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while extracting a JSON field value.
///
/// TLV lookups do not use this type: a missing tag and a malformed record
/// both surface as `None` from [`find_tlv_record`](crate::find_tlv_record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The search pattern does not occur in the input text.
    KeyMissing,
    /// The matched key has an empty value, or the key name is too long to
    /// build a search pattern from.
    Malformed,
    /// The value did not fit in the output buffer. The buffer still holds
    /// the leading part of the value, NUL-terminated.
    Truncated,
}

impl ExtractError {
    /// True for [`ExtractError::Truncated`], the one outcome that leaves
    /// usable data behind in the output buffer.
    pub fn is_truncated(&self) -> bool {
        matches!(self, ExtractError::Truncated)
    }
}

impl core::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ExtractError::KeyMissing => write!(f, "key not found"),
            ExtractError::Malformed => write!(f, "malformed field"),
            ExtractError::Truncated => write!(f, "value truncated to fit output buffer"),
        }
    }
}
