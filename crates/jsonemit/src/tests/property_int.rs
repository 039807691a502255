use alloc::string::ToString;

use quickcheck_macros::quickcheck;

use super::captured;

/// Property: the table-driven encoder agrees with core's `Display` for
/// every unsigned input.
#[quickcheck]
fn u64_matches_display(val: u64) -> bool {
    captured(|s| s.write_u64(val)) == val.to_string()
}

#[quickcheck]
fn i64_matches_display(val: i64) -> bool {
    captured(|s| s.write_i64(val)) == val.to_string()
}

#[quickcheck]
fn narrow_unsigned_match_display(a: u32, b: u16, c: u8) -> bool {
    captured(|s| s.write_u32(a)) == a.to_string()
        && captured(|s| s.write_u16(b)) == b.to_string()
        && captured(|s| s.write_u8(c)) == c.to_string()
}

#[quickcheck]
fn narrow_signed_match_display(a: i32, b: i16, c: i8) -> bool {
    captured(|s| s.write_i32(a)) == a.to_string()
        && captured(|s| s.write_i16(b)) == b.to_string()
        && captured(|s| s.write_i8(c)) == c.to_string()
}
