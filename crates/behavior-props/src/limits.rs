//! Bounds applied when parsing default-value literals from script metadata.
//!
//! Property declarations come from user scripts, so array literals are
//! checked against these before and after decoding.

/// Maximum length in bytes of a default-value literal.
pub const MAX_LITERAL_LEN: usize = 64 * 1024;

/// Maximum number of elements in a decoded array literal.
pub const MAX_ARRAY_LEN: usize = 4096;
