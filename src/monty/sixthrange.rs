//! Sixthrange: requires `n < R/6`, an even tighter bound than Quarterrange
//! that gives extra headroom for chained additions in callers that need it.
//! The value range and finalization rule are identical to Quarterrange's
//! `[0, 2n)`; only the modulus bound check differs.

use super::quarterrange::{fold_below_2n, sub_below_2n};
use super::{convert_out_shared, r_mod_n, r_squared_mod_n, Monty};
use crate::contract::assert_precondition;
use crate::inverse::inv_mod_r;
use crate::redc;
use crate::traits::Word;
use crate::wide::WideMul;

pub struct Sixthrange<T: Word + WideMul> {
    n: T,
    inv_n: T,
    r_mod_n: T,
    r2_mod_n: T,
}

impl<T: Word + WideMul> Monty for Sixthrange<T> {
    type Word = T;
    type Value = T;

    fn new(n: T) -> Self {
        assert_precondition!(n > T::one(), "modulus must exceed 1");
        assert_precondition!(n & T::one() == T::one(), "modulus must be odd");
        let six = T::from(6u32).expect("word type must represent 6");
        assert_precondition!(n < T::max_value() / six, "Sixthrange requires n < R/6");
        let inv_n = inv_mod_r(n);
        let rn = r_mod_n(n);
        let r2 = r_squared_mod_n(n, rn);
        Sixthrange {
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
        let (hi, lo) = T::mulwide(a, self.r2_mod_n);
        redc::redc_quarterrange(hi, lo, self.n, self.inv_n)
    }

    #[inline]
    fn convert_out(&self, v: T) -> T {
        convert_out_shared(v, self.n, self.inv_n)
    }

    #[inline]
    fn canonical(&self, v: T) -> T {
        if v >= self.n {
            v - self.n
        } else {
            v
        }
    }

    #[inline]
    fn unity(&self) -> T {
        self.r_mod_n
    }

    #[inline]
    fn zero(&self) -> T {
        T::zero()
    }

    #[inline]
    fn negative_one(&self) -> T {
        self.n - self.r_mod_n
    }

    #[inline]
    fn add(&self, a: T, b: T) -> T {
        fold_below_2n(a + b, self.n)
    }

    #[inline]
    fn subtract(&self, a: T, b: T) -> T {
        sub_below_2n(a, b, self.n)
    }

    #[inline]
    fn two_times(&self, a: T) -> T {
        fold_below_2n(a + a, self.n)
    }

    #[inline]
    fn negate(&self, a: T) -> T {
        sub_below_2n(T::zero(), a, self.n)
    }

    #[inline]
    fn multiply(&self, a: T, b: T) -> T {
        let (hi, lo) = T::mulwide(a, b);
        redc::redc_quarterrange(hi, lo, self.n, self.inv_n)
    }
}
