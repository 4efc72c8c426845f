mod bm;
mod kmp;
mod rk;

/// Common interface over the substring matchers.
///
/// All matchers are pure functions over byte slices; the `&str` methods are
/// thin wrappers, so match indices for UTF-8 input are byte offsets, not
/// character offsets.
pub trait StringSearch {
    /// First occurrence of `pattern` in `text`, or `None`.
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize>;

    /// All (possibly overlapping) occurrences, in ascending order.
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize>;

    fn find(text: &str, pattern: &str) -> Option<usize> {
        Self::find_bytes(text.as_bytes(), pattern.as_bytes())
    }

    fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        Self::find_all_bytes(text.as_bytes(), pattern.as_bytes())
    }
}

pub use bm::{BM, bm_find, bm_find_all};
pub use kmp::{KMP, kmp_find, kmp_find_all};
pub use rk::{RabinKarp, rk_find, rk_find_all};
