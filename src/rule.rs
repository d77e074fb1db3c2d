//! The generated CSS rule and the per-line size estimate.

use std::io::{self, Write};

/// Length of the rule text without its class index, as counted by the
/// sizing estimate.
pub const TEMPLATE_LEN: u64 = 11;

/// Trailing `\n` of every rule line.
pub const NEWLINE_LEN: u64 = 1;

/// Bytes in one megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Text of rule `k`, including the trailing newline.
pub fn rule_line(k: u64) -> String {
    format!(".class{k} {{color: #000;}}\n")
}

/// Write rule `k` straight into `out`.
pub fn write_rule<W: Write>(out: &mut W, k: u64) -> io::Result<()> {
    writeln!(out, ".class{k} {{color: #000;}}")
}

/// Number of decimal digits in `n`.
pub fn digit_width(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// Estimated byte length of one line in fixture `index`.
///
/// Uses the digit width of the file index, not of the class index, so the
/// estimate stays fixed for the whole file while the real lines grow wider.
pub fn line_estimate(index: u32) -> u64 {
    TEMPLATE_LEN + u64::from(digit_width(u64::from(index))) + NEWLINE_LEN
}

pub fn target_bytes(size_mb: f64) -> f64 {
    size_mb * BYTES_PER_MB
}

/// Number of rules to write into fixture `index` for a `size_mb` target.
///
/// Zero, negative and NaN sizes give zero lines.
pub fn line_count(size_mb: f64, index: u32) -> u64 {
    let lines = (target_bytes(size_mb) / line_estimate(index) as f64).floor();
    // `as` saturates: NaN and negatives land on 0.
    lines as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_text_is_fixed() {
        assert_eq!(rule_line(0), ".class0 {color: #000;}\n");
        assert_eq!(rule_line(80658), ".class80658 {color: #000;}\n");
    }

    #[test]
    fn write_rule_matches_rule_line() {
        let mut buf = Vec::new();
        for k in [0, 9, 10, 12345] {
            write_rule(&mut buf, k).unwrap();
        }
        let expected: String = [0, 9, 10, 12345].iter().map(|k| rule_line(*k)).collect();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn digit_widths() {
        assert_eq!(digit_width(0), 1);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(99), 2);
        assert_eq!(digit_width(100), 3);
        assert_eq!(digit_width(u64::MAX), 20);
    }

    #[test]
    fn estimate_grows_with_file_index() {
        assert_eq!(line_estimate(1), 13);
        assert_eq!(line_estimate(9), 13);
        assert_eq!(line_estimate(10), 14);
        assert_eq!(line_estimate(50), 14);
        assert_eq!(line_estimate(100), 15);
    }

    #[test]
    fn one_megabyte_first_file() {
        assert_eq!(line_count(1.0, 1), 80659);
        assert_eq!(line_count(1.0, 10), 1_048_576 / 14);
    }

    #[test]
    fn fractional_sizes_floor() {
        // 0.001 MB = 1048.576 bytes, / 13 = 80.66
        assert_eq!(line_count(0.001, 1), 80);
    }

    #[test]
    fn degenerate_sizes_give_no_lines() {
        assert_eq!(line_count(0.0, 1), 0);
        assert_eq!(line_count(-3.0, 1), 0);
        assert_eq!(line_count(f64::NAN, 1), 0);
    }
}
