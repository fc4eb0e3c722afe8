//! This crate provides efficient Montgomery modular arithmetic operations
//! for primitive unsigned integer types (`u8` through `u128`): REDC
//! reduction, six range-restricted Monty variants trading a restriction on
//! the modulus for cheaper finalization, a fused base-2 exponentiation
//! engine, and plain (non-Montgomery) modular arithmetic for one-off
//! operations that don't warrant setting up a Montgomery context.

use std::ops::{Add, Mul, Neg, Sub};

/// This trait describes modular arithmetic operations
pub trait ModularOps<Rhs = Self, Modulus = Self> {
    type Output;

    /// Return (self + rhs) % m
    fn addm(self, rhs: Rhs, m: Modulus) -> Self::Output;

    /// Return (self - rhs) % m
    fn subm(self, rhs: Rhs, m: Modulus) -> Self::Output;

    /// Return (self * rhs) % m
    fn mulm(self, rhs: Rhs, m: Modulus) -> Self::Output;

    /// Return (self ^ exp) % m
    fn powm(self, exp: Rhs, m: Modulus) -> Self::Output;

    /// Return (-self) % m and make sure the result is normalized in range [0,m)
    fn negm(self, m: Modulus) -> Self::Output;

    /// Calculate modular inverse (x such that self*x = 1 mod m).
    ///
    /// This operation is only available for integer that is coprime to `m`
    fn invm(self, m: Modulus) -> Option<Self::Output>
    where
        Self: Sized;

    /// Calculate Jacobi Symbol (a|n), where a is self
    ///
    /// Note that we don't provide Legendre symbol function
    /// here, as it depends on primality test. However, if
    /// n is surely a prime, this function can be directly used as
    /// Legendre symbol.
    ///
    /// # Panics
    /// if n is negative or even
    fn jacobi(self, n: Modulus) -> i8;

    /// Calculate Kronecker Symbol (a|n), where a is self
    fn kronecker(self, n: Modulus) -> i8;
}

/// Represents an number defined in a modulo ring ℤ/nℤ
///
/// The operators should panic if the modulus of two number
/// are not the same.
pub trait ModularInteger:
    Sized
    + PartialEq
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Neg<Output = Self>
    + Mul<Self, Output = Self>
{
    /// The underlying representation type of the integer
    type Base;

    /// Return the modulus of the ring
    fn modulus(&self) -> &Self::Base;

    /// Return the normalized residue of this integer in the ring
    fn residue(&self) -> Self::Base;

    /// Convert an normal integer into the same ring.
    ///
    /// This method should be perferred over the static
    /// constructor to prevent unnecessary overhead of pre-computation.
    fn new(&self, n: Self::Base) -> Self;
}

mod contract;
mod inverse;
mod monty;
mod monty_int;
mod prim;
mod redc;
mod reduced;
mod stdmul;
mod traits;
mod two_pow;
mod wide;

pub use monty::{
    FullRangeMasked, Fullrange, FusedMonty, Halfrange, MaskedValue, Monty, Quarterrange,
    Sixthrange, SqrtRange,
};
pub use monty_int::MontgomeryInt;
pub use stdmul::{has_slow_perf, mulmod_native_double, mulmod_slow, mulmod_wide_intrinsics};
pub use traits::{HasDouble, Word};
pub use two_pow::{two_pow, two_pow_array, PowTable, DEFAULT_TABLE_BITS};
pub use wide::{WideDiv, WideMul};
