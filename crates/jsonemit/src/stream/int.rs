//! Integer write operations.
//!
//! Each width gets an unrolled path that peels 3-digit groups off with one
//! division per group, bounded by the width's maximum group count (u8: one
//! group, u16: two, u32: four, u64: seven). The most-significant group is
//! emitted with its leading zeros stripped via the table's skip count;
//! every later group is exactly three bytes, zero-padded.

use crate::digits;

use super::Stream;

impl Stream {
    /// Emits the most-significant group, dropping leading zeros.
    fn write_leading_group(&mut self, packed: u32) {
        let skip = packed >> digits::SKIP_SHIFT;
        if skip == 0 {
            self.out
                .write_two_bytes((packed >> 16) as u8, (packed >> 8) as u8);
        } else if skip == 1 {
            self.out.write_byte((packed >> 8) as u8);
        }
        self.out.write_byte(packed as u8);
    }

    /// Emits a non-leading group as exactly three digits.
    fn write_group(&mut self, packed: u32) {
        self.out
            .write_three_bytes((packed >> 16) as u8, (packed >> 8) as u8, packed as u8);
    }

    /// Writes `val` in decimal ASCII.
    pub fn write_u8(&mut self, val: u8) {
        self.write_leading_group(digits::GROUPS[usize::from(val)]);
    }

    /// Writes `val` in decimal ASCII, with a leading `-` when negative.
    pub fn write_i8(&mut self, val: i8) {
        if val < 0 {
            self.out.write_byte(b'-');
        }
        self.write_u8(val.unsigned_abs());
    }

    /// Writes `val` in decimal ASCII.
    pub fn write_u16(&mut self, val: u16) {
        let q1 = val / 1000;
        if q1 == 0 {
            self.write_leading_group(digits::GROUPS[usize::from(val)]);
            return;
        }
        let r1 = val - q1 * 1000;
        self.write_leading_group(digits::GROUPS[usize::from(q1)]);
        self.write_group(digits::GROUPS[usize::from(r1)]);
    }

    /// Writes `val` in decimal ASCII, with a leading `-` when negative.
    pub fn write_i16(&mut self, val: i16) {
        if val < 0 {
            self.out.write_byte(b'-');
        }
        self.write_u16(val.unsigned_abs());
    }

    /// Writes `val` in decimal ASCII.
    pub fn write_u32(&mut self, val: u32) {
        let q1 = val / 1000;
        if q1 == 0 {
            self.write_leading_group(digits::GROUPS[val as usize]);
            return;
        }
        let r1 = val - q1 * 1000;
        let q2 = q1 / 1000;
        if q2 == 0 {
            self.write_leading_group(digits::GROUPS[q1 as usize]);
            self.write_group(digits::GROUPS[r1 as usize]);
            return;
        }
        let r2 = q1 - q2 * 1000;
        let q3 = q2 / 1000;
        if q3 == 0 {
            self.write_leading_group(digits::GROUPS[q2 as usize]);
        } else {
            // The fourth group of a u32 is a single digit in 1..=4.
            let r3 = q2 - q3 * 1000;
            self.out.write_byte(b'0' + q3 as u8);
            self.write_group(digits::GROUPS[r3 as usize]);
        }
        self.write_group(digits::GROUPS[r2 as usize]);
        self.write_group(digits::GROUPS[r1 as usize]);
    }

    /// Writes `val` in decimal ASCII, with a leading `-` when negative.
    ///
    /// `i32::MIN` is handled via `unsigned_abs`; its magnitude is not
    /// representable in `i32`.
    pub fn write_i32(&mut self, val: i32) {
        if val < 0 {
            self.out.write_byte(b'-');
        }
        self.write_u32(val.unsigned_abs());
    }

    /// Writes `val` in decimal ASCII.
    pub fn write_u64(&mut self, val: u64) {
        let q1 = val / 1000;
        if q1 == 0 {
            self.write_leading_group(digits::GROUPS[val as usize]);
            return;
        }
        let r1 = val - q1 * 1000;
        let q2 = q1 / 1000;
        if q2 == 0 {
            self.write_leading_group(digits::GROUPS[q1 as usize]);
            self.write_group(digits::GROUPS[r1 as usize]);
            return;
        }
        let r2 = q1 - q2 * 1000;
        let q3 = q2 / 1000;
        if q3 == 0 {
            self.write_leading_group(digits::GROUPS[q2 as usize]);
            self.write_group(digits::GROUPS[r2 as usize]);
            self.write_group(digits::GROUPS[r1 as usize]);
            return;
        }
        let r3 = q2 - q3 * 1000;
        let q4 = q3 / 1000;
        if q4 == 0 {
            self.write_leading_group(digits::GROUPS[q3 as usize]);
            self.write_group(digits::GROUPS[r3 as usize]);
            self.write_group(digits::GROUPS[r2 as usize]);
            self.write_group(digits::GROUPS[r1 as usize]);
            return;
        }
        let r4 = q3 - q4 * 1000;
        let q5 = q4 / 1000;
        if q5 == 0 {
            self.write_leading_group(digits::GROUPS[q4 as usize]);
            self.write_group(digits::GROUPS[r4 as usize]);
            self.write_group(digits::GROUPS[r3 as usize]);
            self.write_group(digits::GROUPS[r2 as usize]);
            self.write_group(digits::GROUPS[r1 as usize]);
            return;
        }
        let r5 = q4 - q5 * 1000;
        let q6 = q5 / 1000;
        if q6 == 0 {
            self.write_leading_group(digits::GROUPS[q5 as usize]);
        } else {
            // u64::MAX has twenty digits: a seventh, two-digit group.
            self.write_leading_group(digits::GROUPS[q6 as usize]);
            let r6 = q5 - q6 * 1000;
            self.write_group(digits::GROUPS[r6 as usize]);
        }
        self.write_group(digits::GROUPS[r5 as usize]);
        self.write_group(digits::GROUPS[r4 as usize]);
        self.write_group(digits::GROUPS[r3 as usize]);
        self.write_group(digits::GROUPS[r2 as usize]);
        self.write_group(digits::GROUPS[r1 as usize]);
    }

    /// Writes `val` in decimal ASCII, with a leading `-` when negative.
    ///
    /// `i64::MIN` is handled via `unsigned_abs`; its magnitude is not
    /// representable in `i64`.
    pub fn write_i64(&mut self, val: i64) {
        if val < 0 {
            self.out.write_byte(b'-');
        }
        self.write_u64(val.unsigned_abs());
    }

    /// Writes a pointer-sized unsigned integer.
    pub fn write_usize(&mut self, val: usize) {
        self.write_u64(val as u64);
    }

    /// Writes a pointer-sized signed integer.
    pub fn write_isize(&mut self, val: isize) {
        self.write_i64(val as i64);
    }
}
