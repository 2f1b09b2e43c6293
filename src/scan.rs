/// Position of the first byte in the inclusive range `[start, end]` that is
/// neither a space nor a horizontal tab. A NUL byte ends the scan early, as
/// if the data stopped there. The range is clamped to the buffer.
pub fn next_non_blank(bytes: &[u8], start: usize, end: usize) -> Option<usize> {
    let last = end.min(bytes.len().checked_sub(1)?);
    for (offset, &byte) in bytes.get(start..=last)?.iter().enumerate() {
        match byte {
            b' ' | b'\t' => {}
            0 => return None,
            _ => return Some(start + offset),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_non_blank() {
        assert_eq!(next_non_blank(b"  \tx", 0, 3), Some(3));
        assert_eq!(next_non_blank(b"x", 0, 0), Some(0));
    }

    #[test]
    fn skips_nothing_when_start_is_non_blank() {
        assert_eq!(next_non_blank(b"a b", 0, 2), Some(0));
        assert_eq!(next_non_blank(b"a b", 1, 2), Some(2));
    }

    #[test]
    fn exhausted_range_is_none() {
        assert_eq!(next_non_blank(b"   ", 0, 2), None);
        assert_eq!(next_non_blank(b"", 0, 0), None);
        assert_eq!(next_non_blank(b"ab", 5, 9), None);
    }

    #[test]
    fn nul_ends_the_scan_early() {
        assert_eq!(next_non_blank(b"  \0x", 0, 3), None);
        assert_eq!(next_non_blank(b"\0", 0, 0), None);
    }

    #[test]
    fn end_is_inclusive_and_clamped() {
        assert_eq!(next_non_blank(b"   x", 0, 2), None);
        assert_eq!(next_non_blank(b"   x", 0, 3), Some(3));
        assert_eq!(next_non_blank(b"   x", 0, 99), Some(3));
    }
}
