use crate::StringSearch;

pub struct BM;

impl StringSearch for BM {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        bm_find_all(text, pattern)
    }
}

/// Bad-character table: byte -> rightmost index in the pattern, -1 if absent.
/// Later occurrences overwrite earlier ones.
fn build_bad_char_table(pattern: &[u8]) -> [isize; 256] {
    let mut table = [-1isize; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

/// Shift increment after a mismatch at pattern index `j` against text byte
/// `bad_byte`: max(1, j - last occurrence of bad_byte in the pattern).
fn bad_char_shift(bad_char: &[isize; 256], j: usize, bad_byte: u8) -> usize {
    let shift = j as isize - bad_char[bad_byte as usize];
    if shift > 0 { shift as usize } else { 1 }
}

/// Find the first occurrence of `pattern` in `text` using Boyer–Moore with
/// the bad-character heuristic only (no good-suffix table).
///
/// Operates on raw bytes; UTF-8 is fine but not required. An empty pattern
/// matches at 0.
pub fn bm_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let bad_char = build_bad_char_table(pattern);

    let mut s = 0usize; // index in text where the current alignment starts

    while s <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            j -= 1;
        }

        if j < 0 {
            // full match
            return Some(s);
        }

        let mismatch_index = j as usize;
        s += bad_char_shift(&bad_char, mismatch_index, text[s + mismatch_index]);
    }

    None
}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`.
/// Returns a vector of starting indices in ascending order.
pub fn bm_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        // Convention: match at every index (including at the end)
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let bad_char = build_bad_char_table(pattern);

    let mut res = Vec::new();
    let mut s = 0usize;

    while s <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            j -= 1;
        }

        if j < 0 {
            res.push(s);
            // Without a good-suffix table the only safe restart is the
            // next alignment, which also keeps overlapping matches.
            s += 1;
        } else {
            let mismatch_index = j as usize;
            s += bad_char_shift(&bad_char, mismatch_index, text[s + mismatch_index]);
        }
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bm_first_occurrence() {
        let hay = b"abracadabra";
        assert_eq!(bm_find(hay, b"abra"), Some(0));
        assert_eq!(bm_find(hay, b"cad"), Some(4));
    }

    #[test]
    fn test_bm_repeated_prefix() {
        let hay = b"aaaaaa";
        let pat = b"aaa";
        assert_eq!(bm_find(hay, pat), Some(0));
    }

    #[test]
    fn test_bm_not_found() {
        let hay = b"hello";
        let pat = b"xyz";
        assert_eq!(bm_find(hay, pat), None);
    }

    #[test]
    fn test_bm_pattern_longer_than_text() {
        assert_eq!(bm_find(b"ab", b"abc"), None);
        assert_eq!(bm_find_all(b"ab", b"abc"), Vec::<usize>::new());
    }

    #[test]
    fn test_bm_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(bm_find(hay, pat), Some(0));
        assert_eq!(bm_find(b"", pat), Some(0));
        assert_eq!(bm_find_all(hay, pat), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bm_find_all_overlapping() {
        let hay = b"aaaa";
        let pat = b"aa";
        assert_eq!(bm_find_all(hay, pat), vec![0, 1, 2]);
    }

    #[test]
    fn test_bm_find_all_gap() {
        let hay = b"aabaa";
        let pat = b"aa";
        assert_eq!(bm_find_all(hay, pat), vec![0, 3]);
    }

    #[test]
    fn test_bm_utf8_byte_offsets() {
        let hay_s = "🌍hello🌍hello";
        let pat_s = "🌍hello";
        assert_eq!(pat_s.len(), 9);

        let hay = hay_s.as_bytes();
        let pat = pat_s.as_bytes();
        assert_eq!(bm_find(hay, pat), Some(0));
        assert_eq!(bm_find_all(hay, pat), vec![0, pat_s.len()]);
    }
}
