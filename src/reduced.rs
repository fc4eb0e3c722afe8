//! Prereduced modular add / subtract / double (component C).
//!
//! Every routine here requires its operands already reduced (`0 <= a,b < n`)
//! and returns a result in the same range without ever overflowing `T`. Each
//! has a `_low_latency` and a `_low_uops` form (the "profile tag" from the
//! design notes): both compute the same algebraic result (`t = n - b; return
//! (a < t) ? a+b : a-t` for add, and its mirror for sub) but differ in how
//! the final selection is made. `LowLatency` branches, which on a predicted
//! branch resolves off the critical path at the cost of a possible
//! misprediction. `LowUops` computes both arms and mask-selects between
//! them -- one fewer instruction on the happy path of a mispredicting
//! branch, but the select depends serially on the comparison. Both forms
//! must produce bit-identical results; callers in tight loops where the
//! branch is unpredictable should prefer `LowUops`, callers who can let the
//! branch predictor warm up should prefer `LowLatency`. With `avoid-cselect`
//! enabled, `LowUops` additionally avoids relying on the compiler lowering
//! the select to a `cmov`, using an explicit mask instead.

use crate::contract::assert_precondition;
use crate::traits::Word;

/// `(a + b) mod n`, requiring `0 <= a, b < n`. Branching form.
#[inline(always)]
pub fn mod_add_low_latency<T: Word>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    let t = n - b;
    if a < t {
        a + b
    } else {
        a - t
    }
}

/// `(a + b) mod n`, requiring `0 <= a, b < n`. Branchless mask-select form.
#[inline(always)]
pub fn mod_add_low_uops<T: Word>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    let t = n - b;
    select(a < t, a + b, a - t)
}

/// Default profile: `LowLatency`.
#[inline(always)]
pub fn mod_add<T: Word>(a: T, b: T, n: T) -> T {
    mod_add_low_latency(a, b, n)
}

/// `(a - b) mod n` (always non-negative), requiring `0 <= a, b < n`.
/// Branching form.
#[inline(always)]
pub fn mod_sub_low_latency<T: Word>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    if a >= b {
        a - b
    } else {
        n - (b - a)
    }
}

/// `(a - b) mod n`. Branchless mask-select form: `diff = a.wrapping_sub(b);
/// diff + (mask & n)` where `mask` is all-ones iff `a < b`.
#[inline(always)]
pub fn mod_sub_low_uops<T: Word>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    let diff = a.wrapping_sub(&b);
    select_mask(a < b, diff.wrapping_add(&n), diff)
}

/// Default profile: `LowLatency`.
#[inline(always)]
pub fn mod_sub<T: Word>(a: T, b: T, n: T) -> T {
    mod_sub_low_latency(a, b, n)
}

/// `2*a mod n`, requiring `n < R/2` and `a < n`. Equivalent to, but cheaper
/// than, `mod_add(a, a, n)` since it skips the `n - b` computation (`b == a`
/// here, and `a + a` is guaranteed not to overflow `T` because `n < R/2`).
#[inline(always)]
pub fn two_times_restricted<T: Word>(a: T, n: T) -> T {
    assert_precondition!(a < n);
    assert_precondition!(
        n <= T::max_value() >> 1,
        "two_times_restricted requires n < R/2"
    );
    let doubled = a + a;
    select(doubled < n, doubled, doubled - n)
}

/// Select `on_true` if `cond` else `on_false`, as either a branch or a mask
/// select depending on the `avoid-cselect` feature. Used by the `LowLatency`
/// variants is just a plain `if`; this helper exists for the handful of
/// call sites (like `two_times_restricted`) that don't have separate
/// low-latency/low-uops entry points.
#[inline(always)]
fn select<T: Word>(cond: bool, on_true: T, on_false: T) -> T {
    if cfg!(feature = "avoid-cselect") {
        select_mask(cond, on_true, on_false)
    } else if cond {
        on_true
    } else {
        on_false
    }
}

/// Explicit mask-select, used on platforms without a cheap conditional move.
#[inline(always)]
fn select_mask<T: Word>(cond: bool, on_true: T, on_false: T) -> T {
    let mask_true = if cond { T::max_value() } else { T::zero() };
    let mask_false = !mask_true;
    (on_true & mask_true) | (on_false & mask_false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_add_profiles_agree() {
        for n in 1u32..200 {
            for a in 0..n {
                for b in 0..n {
                    let low_lat = mod_add_low_latency(a, b, n);
                    let low_uops = mod_add_low_uops(a, b, n);
                    let expected = ((a as u64 + b as u64) % n as u64) as u32;
                    assert_eq!(low_lat, expected);
                    assert_eq!(low_uops, expected);
                }
            }
        }
    }

    #[test]
    fn mod_sub_profiles_agree() {
        for n in 1u32..200 {
            for a in 0..n {
                for b in 0..n {
                    let low_lat = mod_sub_low_latency(a, b, n);
                    let low_uops = mod_sub_low_uops(a, b, n);
                    let expected = ((a as i64 - b as i64).rem_euclid(n as i64)) as u32;
                    assert_eq!(low_lat, expected);
                    assert_eq!(low_uops, expected);
                }
            }
        }
    }

    #[test]
    fn two_times_matches_add() {
        for n in 1u32..100 {
            for a in 0..n {
                assert_eq!(two_times_restricted(a, n), mod_add(a, a, n));
            }
        }
    }
}
