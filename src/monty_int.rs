//! `MontgomeryInt<T>`: an integer held in Montgomery form, implementing
//! [`ModularInteger`] so it composes with `+`, `-`, `*`, unary `-` like a
//! normal integer while staying in Montgomery form between operations.
//!
//! Shaped after the teacher crate's own `MontgomeryInt<T>` (see
//! `examples/sylvestre-num-modular/src/monty.rs`): same `Rc`-shared
//! modulus/inverse pair to avoid re-deriving `inv_n`/`R^2 mod n` on every
//! clone, same `check_modulus_eq` panic on mismatched moduli. It differs in
//! what it delegates to -- `monty::Fullrange`, the variant with no
//! restriction on `n` beyond fitting in a word (`1 < n < R`, odd), matching
//! the teacher's own `MontgomeryInt`, which is generic over any odd modulus
//! that fits the word width with no narrower ceiling.

use crate::monty::{Fullrange, Monty};
use crate::traits::Word;
use crate::wide::WideMul;
use crate::ModularInteger;
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct MontgomeryInt<T: Word + WideMul> {
    value: T,
    n: T,
    ring: Rc<Fullrange<T>>,
}

impl<T: Word + WideMul> MontgomeryInt<T> {
    /// Converts `n` into the modulo ring `Z/mZ` (i.e. `n % m`).
    pub fn new(n: T, m: T) -> Self {
        let ring = Rc::new(Fullrange::new(m));
        let value = ring.convert_in(n % m);
        MontgomeryInt { value, n: m, ring }
    }

    #[inline]
    fn check_modulus_eq(&self, rhs: &Self) {
        if !Rc::ptr_eq(&self.ring, &rhs.ring) && self.n != rhs.n {
            panic!("the modulus of two operands should be the same");
        }
    }
}

impl<T: Word + WideMul> PartialEq for MontgomeryInt<T> {
    fn eq(&self, other: &Self) -> bool {
        self.check_modulus_eq(other);
        self.value == other.value
    }
}

impl<T: Word + WideMul> Add for MontgomeryInt<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.check_modulus_eq(&rhs);
        let value = self.ring.add(self.value, rhs.value);
        MontgomeryInt {
            value,
            n: self.n,
            ring: self.ring,
        }
    }
}

impl<T: Word + WideMul> Sub for MontgomeryInt<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.check_modulus_eq(&rhs);
        let value = self.ring.subtract(self.value, rhs.value);
        MontgomeryInt {
            value,
            n: self.n,
            ring: self.ring,
        }
    }
}

impl<T: Word + WideMul> Neg for MontgomeryInt<T> {
    type Output = Self;

    fn neg(self) -> Self {
        let value = self.ring.negate(self.value);
        MontgomeryInt {
            value,
            n: self.n,
            ring: self.ring,
        }
    }
}

impl<T: Word + WideMul> Mul for MontgomeryInt<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.check_modulus_eq(&rhs);
        let value = self.ring.multiply(self.value, rhs.value);
        MontgomeryInt {
            value,
            n: self.n,
            ring: self.ring,
        }
    }
}

impl<T: Word + WideMul> ModularInteger for MontgomeryInt<T> {
    type Base = T;

    fn modulus(&self) -> &T {
        &self.n
    }

    fn residue(&self) -> T {
        self.ring.convert_out(self.value)
    }

    fn new(&self, n: T) -> Self {
        let value = self.ring.convert_in(n % self.n);
        MontgomeryInt {
            value,
            n: self.n,
            ring: self.ring.clone(),
        }
    }
}
