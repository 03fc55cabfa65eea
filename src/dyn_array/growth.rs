//! Capacity growth policy.
//!
//! Doubling keeps `push` amortized O(1). When a single request jumps past
//! double the current capacity, the policy lands on the next power of two
//! instead, so capacities stay on the same ladder and do not oscillate
//! near the top of the address space.

/// Picks the capacity to grow to so that at least `required` slots fit.
///
/// Safe to call when no growth is needed: if `old` already covers
/// `required` it is returned unchanged. Requests at or below `min_cap`
/// land on `min_cap`. Returns `None` when the next power of two above
/// `required` does not fit in a `usize`; callers report that as a
/// capacity overflow.
///
/// Note this is pure slot math. Whether `new_cap * elem_size` fits the
/// address space is checked where the layout is built.
pub(crate) const fn grow_size(old: usize, required: usize, min_cap: usize) -> Option<usize> {
    if old >= required {
        return Some(old);
    }
    if required <= min_cap {
        return Some(min_cap);
    }

    if let Some(doubled) = old.checked_mul(2) {
        if doubled >= required {
            return Some(doubled);
        }
    }
    return required.checked_next_power_of_two();
}

#[cfg(test)]
mod tests {
    use super::grow_size;

    const MIN: usize = 4;

    #[test]
    fn no_growth_needed_is_identity() {
        assert_eq!(grow_size(8, 8, MIN), Some(8));
        assert_eq!(grow_size(8, 3, MIN), Some(8));
        // Idempotent: feeding the answer back changes nothing.
        assert_eq!(grow_size(16, 16, MIN), Some(16));
    }

    #[test]
    fn small_requests_land_on_the_floor() {
        assert_eq!(grow_size(0, 1, MIN), Some(MIN));
        assert_eq!(grow_size(0, 4, MIN), Some(MIN));
        assert_eq!(grow_size(2, 3, MIN), Some(MIN));
    }

    #[test]
    fn doubles_when_that_covers_the_request() {
        assert_eq!(grow_size(4, 5, MIN), Some(8));
        assert_eq!(grow_size(8, 9, MIN), Some(16));
        assert_eq!(grow_size(1024, 1025, MIN), Some(2048));
    }

    #[test]
    fn jumps_to_next_power_of_two_past_doubling() {
        assert_eq!(grow_size(4, 100, MIN), Some(128));
        assert_eq!(grow_size(8, 17, MIN), Some(32));
        // Exact powers of two are kept as is.
        assert_eq!(grow_size(4, 64, MIN), Some(64));
    }

    #[test]
    fn overflow_reports_failure_not_a_truncated_size() {
        assert_eq!(grow_size(MIN, usize::MAX, MIN), None);
        assert_eq!(grow_size(MIN, (usize::MAX >> 1) + 2, MIN), None);
        // The largest representable power of two still succeeds.
        let top = (usize::MAX >> 1) + 1;
        assert_eq!(grow_size(MIN, top, MIN), Some(top));
    }
}
