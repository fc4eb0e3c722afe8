//! Contract / precondition assertion harness (component I, section 6 and
//! 4.I of SPEC_FULL.md).
//!
//! `assert_precondition!`, `assert_postcondition!`, and `assert_invariant!`
//! mirror `debug_assert!`'s calling convention but are gated by the
//! `assert-level-N` Cargo features instead of `cfg(debug_assertions)`, so a
//! release build can opt into full contract checking independently of
//! `debug_assertions`, and a debug build pays nothing extra for checks above
//! the level it was built with. Levels are cumulative: `assert-level-3`
//! implies `assert-level-2` and `assert-level-1`.
//!
//! - `assert-level-1`: preconditions (the cheapest, most load-bearing checks
//!   -- a violated precondition means the caller already has a bug).
//! - `assert-level-2`: adds postconditions.
//! - `assert-level-3`: adds invariants (checked on every variant
//!   construction and, in hot loops, on every REDC call).
//!
//! Regardless of feature selection, `debug_assertions` builds still run
//! precondition checks via `debug_assert!`, so `cargo test` without any
//! `assert-level-*` feature enabled still catches contract violations.

#[macro_export]
macro_rules! assert_precondition {
    ($cond:expr) => {
        #[cfg(feature = "assert-level-1")]
        {
            assert!($cond, "precondition violated: {}", stringify!($cond));
        }
        #[cfg(not(feature = "assert-level-1"))]
        {
            debug_assert!($cond, "precondition violated: {}", stringify!($cond));
        }
    };
    ($cond:expr, $msg:expr) => {
        #[cfg(feature = "assert-level-1")]
        {
            assert!($cond, "precondition violated: {}", $msg);
        }
        #[cfg(not(feature = "assert-level-1"))]
        {
            debug_assert!($cond, "precondition violated: {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! assert_postcondition {
    ($cond:expr) => {
        #[cfg(feature = "assert-level-2")]
        {
            assert!($cond, "postcondition violated: {}", stringify!($cond));
        }
        #[cfg(not(feature = "assert-level-2"))]
        {
            debug_assert!($cond, "postcondition violated: {}", stringify!($cond));
        }
    };
}

#[macro_export]
macro_rules! assert_invariant {
    ($cond:expr) => {
        #[cfg(feature = "assert-level-3")]
        {
            assert!($cond, "invariant violated: {}", stringify!($cond));
        }
        #[cfg(not(feature = "assert-level-3"))]
        {
            debug_assert!($cond, "invariant violated: {}", stringify!($cond));
        }
    };
}

pub use crate::assert_invariant;
pub use crate::assert_postcondition;
pub use crate::assert_precondition;

#[cfg(test)]
mod tests {
    #[test]
    fn macros_pass_on_true_conditions() {
        assert_precondition!(1 + 1 == 2);
        assert_postcondition!(true);
        assert_invariant!(!false);
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn precondition_panics_in_debug() {
        let n = 0;
        assert_precondition!(n != 0);
    }
}
