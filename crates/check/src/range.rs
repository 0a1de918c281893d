//! All-in-one segment checks.
//!
//! These stand apart from the chains: one call validates a segment of a
//! container and returns its size or end. Use them on hot paths such as
//! buffer slicing, where even a chain is more than needed.
//!
//! ```rust,ignore
//! let len = range::from_to(&buf, start, end)?;
//! let end = range::offset_length(&buf, offset, count)?;
//! ```

use crate::checks::Len;
use crate::error::CheckError;

/// Checks that `[from, to)` lies within `container`.
///
/// Returns the segment's length, `to - from`.
///
/// # Errors
///
/// [`CheckError::IndexOutOfBounds`] if `from > to` or `to` exceeds the
/// container's length.
pub fn from_to<C: Len + ?Sized>(container: &C, from: usize, to: usize) -> Result<usize, CheckError> {
    let len = container.len();
    if from <= to && to <= len {
        Ok(to - from)
    } else {
        Err(CheckError::IndexOutOfBounds(format!(
            "range [{from}, {to}) out of bounds for length {len}"
        )))
    }
}

/// Checks that the segment of `length` elements starting at `offset` lies
/// within `container`.
///
/// Returns the segment's end, `offset + length`.
///
/// # Errors
///
/// [`CheckError::IndexOutOfBounds`] if the segment does not fit, including
/// when `offset + length` overflows.
pub fn offset_length<C: Len + ?Sized>(
    container: &C,
    offset: usize,
    length: usize,
) -> Result<usize, CheckError> {
    let len = container.len();
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(end),
        _ => Err(CheckError::IndexOutOfBounds(format!(
            "range [{offset}, {offset} + {length}) out of bounds for length {len}"
        ))),
    }
}
