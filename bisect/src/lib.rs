/// Outcome of an upper-bound search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound<T> {
    /// The target itself is in the slice.
    Exact(T),
    /// Smallest element strictly greater than the target.
    Above(T),
    /// Every element is smaller than the target (or the slice is empty).
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection<T> {
    /// Number of loop passes the search took.
    pub iterations: usize,
    pub bound: Bound<T>,
}

/// Binary search over a sorted slice that reports, on a miss, the slice's
/// upper bound for the target. Also counts iterations, since comparing that
/// count across inputs is the point of the exercise.
///
/// `items` must be sorted ascending; the result is unspecified otherwise.
pub fn upper_bound<T: PartialOrd + Copy>(items: &[T], target: T) -> Bisection<T> {
    let mut iterations = 0;
    let mut candidate = None;

    if items.is_empty() {
        return Bisection {
            iterations,
            bound: Bound::Unbounded,
        };
    }

    let mut left = 0usize;
    let mut right = items.len() - 1;

    loop {
        iterations += 1;
        let mid = left + (right - left) / 2;

        if items[mid] == target {
            return Bisection {
                iterations,
                bound: Bound::Exact(items[mid]),
            };
        } else if items[mid] < target {
            if mid == right {
                break;
            }
            left = mid + 1;
        } else {
            candidate = Some(items[mid]);
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }

        if left > right {
            break;
        }
    }

    Bisection {
        iterations,
        bound: match candidate {
            Some(value) => Bound::Above(value),
            None => Bound::Unbounded,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &[f64] = &[1.2, 2.5, 3.7, 4.8, 6.0, 7.3];

    #[test]
    fn test_exact_hit() {
        let result = upper_bound(DEMO, 3.7);
        assert_eq!(result.bound, Bound::Exact(3.7));
    }

    #[test]
    fn test_upper_bound_on_miss() {
        // 5.0 is absent; 6.0 is the smallest element above it
        let result = upper_bound(DEMO, 5.0);
        assert_eq!(result.bound, Bound::Above(6.0));
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_target_below_everything() {
        let result = upper_bound(DEMO, 0.5);
        assert_eq!(result.bound, Bound::Above(1.2));
    }

    #[test]
    fn test_target_above_everything() {
        let result = upper_bound(DEMO, 9.9);
        assert_eq!(result.bound, Bound::Unbounded);
    }

    #[test]
    fn test_empty_slice() {
        let result = upper_bound::<f64>(&[], 1.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.bound, Bound::Unbounded);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(upper_bound(&[5], 5).bound, Bound::Exact(5));
        assert_eq!(upper_bound(&[5], 4).bound, Bound::Above(5));
        assert_eq!(upper_bound(&[5], 6).bound, Bound::Unbounded);
    }

    #[test]
    fn test_iterations_at_most_log() {
        let items: Vec<i64> = (0..1024).collect();
        for target in [0, 511, 512, 1023, 1024] {
            let result = upper_bound(&items, target);
            assert!(result.iterations <= 11, "took {} iterations", result.iterations);
        }
    }
}
