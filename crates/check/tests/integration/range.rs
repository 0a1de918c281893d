use nebula_check::CheckError;
use nebula_check::range::{from_to, offset_length};

#[test]
fn slices_within_bounds() {
    let buf = [0u8; 16];
    let len = from_to(&buf, 4, 12).unwrap();
    let end = offset_length(&buf, 4, len).unwrap();
    assert_eq!(buf[4..end].len(), 8);
}

#[test]
fn out_of_bounds_segments() {
    let err = from_to("abc", 2, 5).unwrap_err();
    assert!(matches!(err, CheckError::IndexOutOfBounds(_)));
    assert_eq!(err.to_string(), "range [2, 5) out of bounds for length 3");

    let err = offset_length(&[1, 2, 3], 1, usize::MAX).unwrap_err();
    assert_eq!(err.kind(), "index_out_of_bounds");
}
