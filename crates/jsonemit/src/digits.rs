//! Packed 3-digit lookup table for the integer fast path.
//!
//! Every value in `0..=999` gets one `u32` entry holding its three ASCII
//! digit bytes plus a count of leading characters to skip when the value is
//! the most-significant group of a number:
//!
//! ```text
//! bits 24..  skip count: 2 for values < 10, 1 for < 100, 0 otherwise
//! bits 16..  hundreds digit, ASCII
//! bits  8..  tens digit, ASCII
//! bits  0..  ones digit, ASCII
//! ```
//!
//! The table is a compile-time constant; concurrent readers need no
//! coordination.

/// How far the skip count sits above the three digit bytes.
pub(crate) const SKIP_SHIFT: u32 = 24;

/// Packed groups indexed by value, `0..=999`.
pub(crate) const GROUPS: [u32; 1000] = build();

const fn build() -> [u32; 1000] {
    let mut table = [0u32; 1000];
    let mut i = 0u32;
    while i < 1000 {
        let mut packed = ((i / 100 + b'0' as u32) << 16)
            | ((i / 10 % 10 + b'0' as u32) << 8)
            | (i % 10 + b'0' as u32);
        if i < 10 {
            packed |= 2 << SKIP_SHIFT;
        } else if i < 100 {
            packed |= 1 << SKIP_SHIFT;
        }
        table[i as usize] = packed;
        i += 1;
    }
    table
}
