// -*- mode: rust; -*-
//
// This file is part of f25519.
// Copyright (c) 2025 The f25519 Developers
// See LICENSE for licensing information.

//! The alternate 17-bit-limb "DSP" multiplier.
//!
//! This is not a performance optimization over
//! [`crate::backend::schoolbook`] — it models a hardware datapath whose
//! native operand width is 17x17 -> 34 bits, packing the 255-bit field
//! element into 15 limbs of 17 bits apiece. Ported from `pack17`,
//! `unpack17`, and `f25519_mul__hw` in
//! `examples/original_source/src/f25519.c`.
//!
//! Two deviations from that source, both recorded in `DESIGN.md`:
//!
//! - The source's `f25519_add__hw` is incomplete (it packs operands to
//!   17-bit limbs, then overwrites the packing with an unreduced 8-bit
//!   byte-wise sum, never touching the packed values). There is no
//!   well-defined hardware-path addition to port, so this module has
//!   none; [`crate::FieldElement::add`](core::ops::Add) uses the
//!   single 8-bit-limb implementation regardless of which multiplier
//!   a caller picks.
//! - The source's near-*p* special case during carry propagation
//!   (`all high limbs == 0x1FFFF && low limb >= 0x1FFED`) is a
//!   data-dependent branch. Here it is replaced with an unconditional
//!   `subtle::Choice`-based select on the same predicate, per spec.md
//!   §9's suggestion to mirror the technique `normalize` already uses.
//!
//! Requires both operands already normalized; see spec.md §4.5.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const LIMBS: usize = 15;
const LIMB_BITS: u32 = 17;
const MASK17: u64 = 0x1_ffff;

type Limbs = [u64; LIMBS];

/// Packs a 32-byte little-endian field element into 15 limbs of 17
/// bits: bit `i` of the input becomes bit `i mod 17` of limb `i / 17`,
/// for `0 <= i < 255`.
fn pack17(bytes: &[u8; 32]) -> Limbs {
    let mut out = [0u64; LIMBS];
    for i in 0..255usize {
        if bytes[i / 8] & (1 << (i % 8)) != 0 {
            out[i / 17] |= 1 << (i % 17);
        }
    }
    out
}

/// Inverse of [`pack17`]: bit `k mod 17` of limb `k / 17` becomes bit
/// `k mod 8` of output byte `k / 8`, for `0 <= k < 255`. Byte 31's top
/// bit is never written, so it is always zero.
fn unpack17(limbs: &Limbs) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..255usize {
        if limbs[i / 17] & (1 << (i % 17)) != 0 {
            out[i / 8] |= 1 << (i % 8);
        }
    }
    out
}

/// Constant-time `a == b` for values confined to the low 18 bits of a
/// 64-bit limb.
fn ct_eq17(a: u64, b: u64) -> Choice {
    a.ct_eq(&b)
}

/// Constant-time `a >= b` for values confined to the low 18 bits of a
/// 64-bit limb, via the same wraparound-borrow trick
/// [`crate::FieldElement::normalize`] uses at the byte level: since
/// both operands are tiny next to `u64::MAX`, an underflowing
/// subtraction sets the top bit of the wrapped result.
fn ct_ge17(a: u64, b: u64) -> Choice {
    let diff = a.wrapping_sub(b);
    Choice::from((1 - ((diff >> 63) & 1)) as u8)
}

/// One carry-propagation sweep: folds each 64-bit partial sum down to
/// 17 meaningful bits, carrying into the next limb, with the
/// 2^255 = 19 (mod p) wraparound folded into limbs 0 and 1 per the
/// source's derivation.
fn carry_sweep(p: &Limbs) -> Limbs {
    let mut out = [0u64; LIMBS];

    out[0] = (p[0] & MASK17) + (((p[14] >> LIMB_BITS) & MASK17) * 19) + (((p[13] >> 34) & MASK17) * 19);
    out[1] = (p[1] & MASK17) + ((p[0] >> LIMB_BITS) & MASK17) + (((p[14] >> 34) & MASK17) * 19);
    for k in 2..LIMBS {
        out[k] = (p[k] & MASK17) + ((p[k - 1] >> LIMB_BITS) & MASK17) + (p[k - 2] >> 34);
    }

    for k in 0..LIMBS - 1 {
        out[k + 1] += out[k] >> LIMB_BITS;
        out[k] &= MASK17;
    }
    // out[LIMBS - 1] is intentionally left unmasked: its bit 17, if
    // set, is the overflow `mul_hw` checks for below.

    out
}

/// `mul_hw(r, a, b)`: the product `a * b mod p`, computed via the
/// 17-bit-limb datapath instead of the 8-bit schoolbook multiplier.
/// Both operands must already be normalized (spec.md §4.5).
pub(crate) fn mul_hw(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let a_dsp = pack17(a);
    let b_dsp = pack17(b);

    // a'[k] = a[k] for k >= 0, a[15+k] * 19 for k < 0 (folds the
    // high-limb wrap via 2^255 = 19 mod p).
    let mut a_bar = [0u64; LIMBS];
    for k in 0..LIMBS {
        a_bar[k] = a_dsp[k] * 19;
    }

    let mut p = [0u64; LIMBS];
    for col in 0..LIMBS {
        for row in 0..LIMBS {
            if row >= col {
                p[row] += a_dsp[row - col] * b_dsp[col];
            } else {
                p[row] += a_bar[LIMBS + row - col] * b_dsp[col];
            }
        }
    }

    // Two unconditional carry sweeps; constant-time regardless of
    // whether the correction below is actually needed.
    let mut prop = carry_sweep(&p);

    // Special-case correction, performed only after the first sweep,
    // expressed without a data-dependent branch.
    let mut all_high_are_max = Choice::from(1u8);
    for k in 1..LIMBS {
        all_high_are_max &= ct_eq17(prop[k], MASK17);
    }
    let low_at_or_above_bound = ct_ge17(prop[0], 0x1_ffed);
    let near_p_special_case = all_high_are_max & low_at_or_above_bound;

    let high_limb_overflowed = Choice::from(((prop[LIMBS - 1] >> LIMB_BITS) & 1) as u8);

    let needs_bump = near_p_special_case | high_limb_overflowed;
    let bumped_low = prop[0].wrapping_add(19);
    prop[0] = u64::conditional_select(&prop[0], &bumped_low, needs_bump);

    let cleared_high = prop[LIMBS - 1] & MASK17;
    prop[LIMBS - 1] =
        u64::conditional_select(&prop[LIMBS - 1], &cleared_high, high_limb_overflowed);

    let prop = carry_sweep(&prop);

    unpack17(&prop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trips_on_reduced_values() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[5] = 0x12;
        bytes[31] = 0x3f; // top bit clear, < p
        let limbs = pack17(&bytes);
        assert_eq!(unpack17(&limbs), bytes);
    }
}
