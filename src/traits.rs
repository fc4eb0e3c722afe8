//! Width-adaptive integer traits (component A).
//!
//! Classifies each supported word width `T` and, where the target has a
//! native type twice as wide, exposes it as `Word::Double`. `u128` has no
//! native double on stable Rust, so its wide multiply/divide instead fall
//! back to half-word schoolbook emulation (see `wide.rs`).

use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};

/// A single-word unsigned integer usable as a Montgomery modulus.
///
/// This is the crate's "width-adaptive" trait: every hot routine is generic
/// over `T: Word`, and picks emulated or native wide arithmetic based on
/// `Word::HAS_NATIVE_DOUBLE`.
pub trait Word:
    PrimInt
    + Unsigned
    + WrappingNeg
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Zero
    + core::fmt::Debug
    + 'static
{
    /// Bit width of this word type.
    const BITS: u32;

    /// Whether a native integer type twice as wide as `Self` exists and is
    /// used for `Double`. `false` only for `u128` (would need `u256`).
    const HAS_NATIVE_DOUBLE: bool;

    /// A "safely promoted" unsigned type used for intermediate computation.
    ///
    /// In source ecosystems with C-style integer promotion, a `u8`/`u16`
    /// operand can silently promote to a signed `int`, corrupting unsigned
    /// arithmetic. Rust has no implicit integer promotion, so `Promoted` is
    /// simply `Self`; the associated type is kept to document the intent of
    /// the original design and to give a single seam to widen the guarantee
    /// later if the crate ever targets a source language transpile target.
    type Promoted: Word;

    /// Reinterpret `self` as its promoted form (identity in Rust).
    fn promote(self) -> Self::Promoted;

    /// Number of bits in half of this word, used by the half-word schoolbook
    /// wide multiply/divide fallback.
    #[inline(always)]
    fn half_bits() -> u32 {
        Self::BITS / 2
    }
}

macro_rules! impl_word {
    ($t:ty, $has_double:expr) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const HAS_NATIVE_DOUBLE: bool = $has_double;
            type Promoted = $t;

            #[inline(always)]
            fn promote(self) -> Self::Promoted {
                self
            }
        }
    };
}

impl_word!(u8, true);
impl_word!(u16, true);
impl_word!(u32, true);
impl_word!(u64, true);
impl_word!(u128, false);

/// A word type that has a native integer twice its width (`u8..=u64`).
///
/// Used to select the cheap, non-emulated implementations of `mulwide`,
/// `divwide`, REDC, etc. `u128` does not implement this trait; its wide
/// arithmetic always goes through the emulated path in `wide.rs`.
pub trait HasDouble: Word {
    /// The native double-width unsigned integer type.
    type Double: PrimInt + Unsigned + core::fmt::Debug + From<Self>;

    /// Truncate a double-width value back down to a single word (keeping the
    /// low `Self::BITS` bits).
    fn truncate(wide: Self::Double) -> Self;

    /// Widen `self` into the double-width type.
    fn widen(self) -> Self::Double;
}

macro_rules! impl_has_double {
    ($t:ty, $d:ty) => {
        impl HasDouble for $t {
            type Double = $d;

            #[inline(always)]
            fn truncate(wide: Self::Double) -> Self {
                wide as $t
            }

            #[inline(always)]
            fn widen(self) -> Self::Double {
                self as $d
            }
        }
    };
}

impl_has_double!(u8, u16);
impl_has_double!(u16, u32);
impl_has_double!(u32, u64);
impl_has_double!(u64, u128);
