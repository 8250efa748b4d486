//! Linear masked scan over a byte region
//!
//! The scanner walks every candidate start offset and compares required
//! positions only, bailing out on the first mismatch. Candidates are
//! generated with `memchr` over the first required byte, which keeps the
//! practical cost near O(region) for selective patterns.
//!
//! The scan is read-only and makes no alignment assumptions. An exhausted
//! search returns `None`; absence is a normal outcome, not an error.

use crate::pattern::BytePattern;

/// Find the first offset in `haystack` where `pattern` matches.
pub fn find(haystack: &[u8], pattern: &BytePattern) -> Option<usize> {
    let n = pattern.len();
    if n == 0 || haystack.len() < n {
        return None;
    }

    let last_start = haystack.len() - n;

    let Some((anchor, byte)) = pattern.anchor() else {
        // All-wildcard pattern matches anywhere the region is long enough.
        return Some(0);
    };

    // A candidate start i places the anchor byte at i + anchor.
    memchr::memchr_iter(byte, &haystack[anchor..=last_start + anchor])
        .find(|&i| pattern.matches(&haystack[i..i + n]))
}

/// Find every offset in `haystack` where `pattern` matches.
pub fn find_all(haystack: &[u8], pattern: &BytePattern) -> Vec<usize> {
    let n = pattern.len();
    if n == 0 || haystack.len() < n {
        return Vec::new();
    }

    let last_start = haystack.len() - n;

    let Some((anchor, byte)) = pattern.anchor() else {
        return (0..=last_start).collect();
    };

    memchr::memchr_iter(byte, &haystack[anchor..=last_start + anchor])
        .filter(|&i| pattern.matches(&haystack[i..i + n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: [u8; 8] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];

    #[test]
    fn test_find_with_wildcard() {
        // 0x00 at the wildcard position is ignored; 0x22 and 0x44 anchor the match.
        let pattern = BytePattern::from_masked(&[0x22, 0x00, 0x44], "x?x").unwrap();
        assert_eq!(find(&REGION, &pattern), Some(1));
    }

    #[test]
    fn test_find_absent_byte() {
        let pattern = BytePattern::from_masked(&[0x99, 0x00], "x?").unwrap();
        assert_eq!(find(&REGION, &pattern), None);
    }

    #[test]
    fn test_find_is_deterministic() {
        let pattern = BytePattern::parse("33 ?? 55").unwrap();
        let first = find(&REGION, &pattern);
        assert_eq!(first, Some(2));
        assert_eq!(find(&REGION, &pattern), first);
    }

    #[test]
    fn test_find_returns_first_of_many() {
        let region = [0xAA, 0x10, 0xBB, 0x10, 0xCC, 0x10];
        let pattern = BytePattern::parse("10 ??").unwrap();
        assert_eq!(find(&region, &pattern), Some(1));
        assert_eq!(find_all(&region, &pattern), vec![1, 3]);
    }

    #[test]
    fn test_find_leading_wildcard_anchor() {
        // Anchor is the first *required* byte, not position zero.
        let pattern = BytePattern::parse("?? 44 55").unwrap();
        assert_eq!(find(&REGION, &pattern), Some(2));
    }

    #[test]
    fn test_find_all_wildcards() {
        let pattern = BytePattern::parse("?? ?? ??").unwrap();
        assert_eq!(find(&REGION, &pattern), Some(0));
    }

    #[test]
    fn test_region_shorter_than_pattern() {
        let pattern = BytePattern::parse("11 22 33").unwrap();
        assert_eq!(find(&REGION[..2], &pattern), None);
    }

    #[test]
    fn test_match_at_region_end() {
        let pattern = BytePattern::parse("77 88").unwrap();
        assert_eq!(find(&REGION, &pattern), Some(6));
    }

    #[test]
    fn test_anchor_near_end_does_not_overrun() {
        // Anchor byte also present past the last viable start offset.
        let region = [0x00, 0x55, 0x01, 0x55];
        let pattern = BytePattern::parse("55 01 55").unwrap();
        assert_eq!(find(&region, &pattern), Some(1));
    }
}
