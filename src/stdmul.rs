//! Standard (non-Montgomery) modular multiplication (component H): an
//! independent fast path for `(a*b) mod n` used by variant construction
//! (computing `R mod n`'s relatives) and directly by callers who don't want
//! to set up a Montgomery context for one multiply.
//!
//! Mirrors `uutils coreutils`'s `factor::numeric::multiply` fallback: when
//! no wide multiply/divide is available, Russian-peasant multiplication
//! does the reduction one bit of `b` at a time using only `mod_add` and
//! doubling, at the cost of `O(bits)` modular additions instead of one
//! wide multiply/divide pair.

use crate::contract::assert_precondition;
use crate::reduced;
use crate::traits::{HasDouble, Word};
use crate::wide::{WideDiv, WideMul};

/// `(a*b) mod n`, requiring `a < n`, `b < n`. Uses the native double-width
/// type when available (`T: HasDouble`), which covers every width this
/// crate supports (`u128`'s `WideMul`/`WideDiv` emulation is handled by the
/// wide-intrinsics path below instead).
#[inline]
pub fn mulmod_native_double<T: HasDouble>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    let wide = a.widen() * b.widen();
    let nw = n.widen();
    T::truncate(wide % nw)
}

/// `(a*b) mod n` using only `mulwide`/`divwide`, for widths without (or not
/// using) a native double -- the path `u128` goes through, and the one
/// every width can fall back to when `TARGET_ISA_HAS_NO_DIVIDE` isn't set
/// but a native double type isn't available either.
#[inline]
pub fn mulmod_wide_intrinsics<T: Word + WideMul + WideDiv>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    let (hi, lo) = T::mulwide(a, b);
    if hi == T::zero() {
        return lo % n;
    }
    let (_, r) = T::divwide(hi, lo, n);
    r
}

/// `(a*b) mod n` via Russian-peasant multiplication: accumulate `a` into
/// the result once per set bit of `b`, doubling `a` (mod `n`) each step.
/// `O(bits)` modular additions, no division or wide multiply at all.
#[inline]
pub fn mulmod_slow<T: Word>(a: T, b: T, n: T) -> T {
    assert_precondition!(a < n && b < n);
    if cfg!(feature = "error-on-slow-math") {
        panic!("mulmod_slow invoked with error-on-slow-math enabled");
    }

    let mut result = T::zero();
    let mut acc = a;
    let mut exp = b;
    while exp != T::zero() {
        if exp & T::one() == T::one() {
            result = reduced::mod_add(result, acc, n);
        }
        acc = reduced::mod_add(acc, acc, n);
        exp = exp >> 1;
    }
    result
}

/// Whether [`mulmod_slow`] is what `mulmod` below actually dispatches to
/// for `T`, i.e. whether this build has no faster path compiled in for
/// this width. Only `u128` lacks both a native double and (for now) a wide
/// divide, so it alone is slow.
#[inline]
pub fn has_slow_perf<T: Word>() -> bool {
    !T::HAS_NATIVE_DOUBLE
}
