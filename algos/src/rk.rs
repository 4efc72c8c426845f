use crate::StringSearch;

pub struct RabinKarp;

impl StringSearch for RabinKarp {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        rk_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        rk_find_all(text, pattern)
    }
}

/// Polynomial hash base (one per byte value).
const BASE: u64 = 256;

/// Hash modulus. Deliberately tiny: collisions are easy to construct, which
/// keeps the equality-check guard observable. Not suitable outside teaching.
const PRIME: u64 = 101;

/// Rolling hash over a fixed-length window, updated in O(1) per slide.
struct RollingHash {
    hash: u64,
    // BASE^(m-1) mod PRIME, the weight of the window's leading byte
    lead_weight: u64,
}

impl RollingHash {
    fn new(window: &[u8]) -> Self {
        let mut lead_weight = 1;
        for _ in 1..window.len() {
            lead_weight = (lead_weight * BASE) % PRIME;
        }
        RollingHash {
            hash: hash_bytes(window),
            lead_weight,
        }
    }

    /// Slide the window one byte to the right.
    fn slide(&mut self, outgoing: u8, incoming: u8) {
        let without_lead = self.hash + PRIME - (outgoing as u64 * self.lead_weight) % PRIME;
        self.hash = (without_lead * BASE + incoming as u64) % PRIME;
    }
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut h = 0;
    for &b in bytes {
        h = (h * BASE + b as u64) % PRIME;
    }
    h
}

/// Find the first occurrence of `pattern` in `text` using Rabin–Karp.
///
/// A hash hit alone is never reported: the window is compared byte-by-byte
/// first, so collisions under the small modulus cannot produce a false
/// positive. An empty pattern matches at 0.
pub fn rk_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let pattern_hash = hash_bytes(pattern);
    let mut window = RollingHash::new(&text[..m]);

    for i in 0..=n - m {
        if window.hash == pattern_hash {
            if &text[i..i + m] == pattern {
                return Some(i);
            }
            log::debug!("rk_find: hash collision at index {i}");
        }

        if i < n - m {
            window.slide(text[i], text[i + m]);
        }
    }

    None
}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`.
pub fn rk_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let pattern_hash = hash_bytes(pattern);
    let mut window = RollingHash::new(&text[..m]);
    let mut result = Vec::new();

    for i in 0..=n - m {
        if window.hash == pattern_hash {
            if &text[i..i + m] == pattern {
                result.push(i);
            } else {
                log::debug!("rk_find_all: hash collision at index {i}");
            }
        }

        if i < n - m {
            window.slide(text[i], text[i + m]);
        }
    }

    result
}
