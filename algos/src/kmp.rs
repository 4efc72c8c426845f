use crate::StringSearch;

pub struct KMP;

impl StringSearch for KMP {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        kmp_find_all(text, pattern)
    }
}

/// Build the "longest proper prefix which is also a suffix" (lps) table.
/// lps[i] is that length for pattern[0..=i].
fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // fall back through shorter borders instead of restarting
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Find the first occurrence of `pattern` in `text` using Knuth–Morris–Pratt.
/// An empty pattern matches at 0.
pub fn kmp_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let lps = build_lps(pattern);

    let mut i = 0; // index in text
    let mut j = 0; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1
                return Some(i - m);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`.
pub fn kmp_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let lps = build_lps(pattern);
    let mut result = Vec::new();

    let mut i = 0;
    let mut j = 0;

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                result.push(i - m);
                // continue as if mismatched right after the match
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lps_table() {
        assert_eq!(build_lps(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(build_lps(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(build_lps(b"aabaaac"), vec![0, 1, 0, 1, 2, 2, 0]);
    }

    #[test]
    fn test_kmp_first_occurrence() {
        let hay = b"abracadabra";
        assert_eq!(kmp_find(hay, b"abra"), Some(0));
        assert_eq!(kmp_find(hay, b"cad"), Some(4));
    }

    #[test]
    fn test_kmp_repeated_prefix() {
        assert_eq!(kmp_find(b"aaaaaa", b"aaa"), Some(0));
    }

    #[test]
    fn test_kmp_not_found() {
        assert_eq!(kmp_find(b"hello", b"xyz"), None);
    }

    #[test]
    fn test_kmp_pattern_longer_than_text() {
        assert_eq!(kmp_find(b"ab", b"abc"), None);
        assert_eq!(kmp_find_all(b"ab", b"abc"), Vec::<usize>::new());
    }

    #[test]
    fn test_kmp_empty_pattern() {
        assert_eq!(kmp_find(b"abc", b""), Some(0));
        assert_eq!(kmp_find_all(b"abc", b""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_kmp_find_all_overlapping() {
        assert_eq!(kmp_find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(kmp_find_all(b"ababab", b"abab"), vec![0, 2]);
    }

    #[test]
    fn test_kmp_utf8_byte_offsets() {
        let hay = "🌍hello🌍hello".as_bytes();
        let pat = "🌍hello".as_bytes();

        assert_eq!(kmp_find(hay, pat), Some(0));
        assert_eq!(kmp_find_all(hay, pat), vec![0, 9]);
    }
}
