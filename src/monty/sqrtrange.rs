//! SqrtRange: requires `n < sqrt(R)`, so any product of two in-range values
//! fits natively in a single word -- REDC never needs a genuine wide
//! multiply here, only the ordinary single-word one. Zero is represented as
//! `n` itself rather than `0`, so every value lives in `(0, n]`; since `n`
//! is already `≡ 0 (mod n)`, ordinary arithmetic on the literal value `n`
//! produces correct results without a branch on "is this the zero
//! sentinel".

use super::{convert_out_shared, r_mod_n, r_squared_mod_n, Monty};
use crate::contract::assert_precondition;
use crate::inverse::inv_mod_r;
use crate::redc;
use crate::traits::Word;
use crate::wide::WideMul;

pub struct SqrtRange<T: Word + WideMul> {
    n: T,
    inv_n: T,
    r_mod_n: T,
    r2_mod_n: T,
}

impl<T: Word + WideMul> Monty for SqrtRange<T> {
    type Word = T;
    type Value = T;

    fn new(n: T) -> Self {
        assert_precondition!(n > T::one(), "modulus must exceed 1");
        assert_precondition!(n & T::one() == T::one(), "modulus must be odd");
        let (hi, _) = T::mulwide(n, n);
        assert_precondition!(hi == T::zero(), "SqrtRange requires n < sqrt(R)");
        let inv_n = inv_mod_r(n);
        let rn = r_mod_n(n);
        let r2 = r_squared_mod_n(n, rn);
        SqrtRange {
            n,
            inv_n,
            r_mod_n: rn,
            r2_mod_n: r2,
        }
    }

    #[inline]
    fn modulus(&self) -> T {
        self.n
    }

    #[inline]
    fn convert_in(&self, a: T) -> T {
        assert_precondition!(a < self.n, "convert_in requires a < n");
        if a == T::zero() {
            return self.n;
        }
        let (hi, lo) = T::mulwide(a, self.r2_mod_n);
        let v = redc::redc(hi, lo, self.n, self.inv_n);
        if v == T::zero() {
            self.n
        } else {
            v
        }
    }

    #[inline]
    fn convert_out(&self, v: T) -> T {
        convert_out_shared(v, self.n, self.inv_n)
    }

    #[inline]
    fn canonical(&self, v: T) -> T {
        v
    }

    #[inline]
    fn unity(&self) -> T {
        self.convert_in(T::one())
    }

    #[inline]
    fn zero(&self) -> T {
        self.n
    }

    #[inline]
    fn negative_one(&self) -> T {
        self.n - self.r_mod_n
    }

    #[inline]
    fn add(&self, a: T, b: T) -> T {
        let sum = a + b;
        if sum > self.n {
            sum - self.n
        } else {
            sum
        }
    }

    #[inline]
    fn subtract(&self, a: T, b: T) -> T {
        self.add(a, self.negate(b))
    }

    #[inline]
    fn two_times(&self, a: T) -> T {
        self.add(a, a)
    }

    #[inline]
    fn negate(&self, a: T) -> T {
        if a == self.n {
            self.n
        } else {
            self.n - a
        }
    }

    #[inline]
    fn multiply(&self, a: T, b: T) -> T {
        // a, b <= n < sqrt(R), so a*b < R: fits natively, no wide multiply.
        let product = a.wrapping_mul(&b);
        let v = redc::redc(T::zero(), product, self.n, self.inv_n);
        if v == T::zero() {
            self.n
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s5_scenario() {
        // The design's scenario table claims convert_out(1 * 65536) == 0 for
        // n = 65537, but 1*65536 mod 65537 is 65536, not 0 (its own
        // parenthetical even flags the check as suspect); the functional
        // property is asserted here instead, same resolution as the
        // inverse_mod_R scenario's literal error (see DESIGN.md).
        let m = SqrtRange::<u64>::new(65_537);
        let zero = m.convert_in(0);
        assert_eq!(zero, 65_537);
        let one = m.convert_in(1);
        let other = m.convert_in(65_536);
        let product = m.multiply(one, other);
        assert_eq!(m.convert_out(product), 65_536);
    }

    #[test]
    fn roundtrip_never_produces_zero() {
        let m = SqrtRange::<u64>::new(65_537);
        for a in 0u64..20 {
            let v = m.convert_in(a);
            assert!(v > 0);
            assert_eq!(m.convert_out(v), a);
        }
    }

    #[test]
    fn add_and_negate_consistent() {
        let m = SqrtRange::<u64>::new(65_537);
        let a = m.convert_in(40_000);
        let b = m.convert_in(40_000);
        let sum = m.add(a, b);
        assert_eq!(m.convert_out(sum), (80_000u64) % 65_537);
        let neg_a = m.negate(a);
        assert_eq!(m.convert_out(m.add(a, neg_a)), 0);
    }
}
