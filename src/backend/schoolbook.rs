// -*- mode: rust; -*-
//
// This file is part of f25519.
// Copyright (c) 2025 The f25519 Developers
// See LICENSE for licensing information.

//! The 8-bit-limb schoolbook multiplier, scalar-multiply, Fermat
//! inverse, and Tonelli-shortcut square root.
//!
//! Ported from `f25519_mul__distinct`, `f25519_mul_c`,
//! `f25519_inv__distinct`, `exp2523`, and `f25519_sqrt` in
//! `examples/original_source/src/f25519.c`. These are the one place in
//! the crate where "distinct" (non-aliasing) helpers are kept: the
//! Fermat and `exp2523` addition chains alternate between two buffers
//! by construction and never alias, so there is nothing for a public,
//! aliasing-safe wrapper to do beyond what [`crate::FieldElement::mul`]
//! and [`crate::FieldElement::invert`] already provide.

/// `mul_distinct(r, a, b)`: interleaves the 256x256-bit schoolbook
/// product with the reduction `2^256 = 38 (mod p)` so only 32 output
/// bytes are ever materialized. Tolerates unreduced (`< 2^256`)
/// operands.
pub(crate) fn mul_distinct(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut r = [0u8; 32];
    let mut c: u32 = 0;

    for i in 0..32 {
        c >>= 8;
        for j in 0..=i {
            c = c.wrapping_add((a[j] as u32).wrapping_mul(b[i - j] as u32));
        }
        for j in (i + 1)..32 {
            c = c.wrapping_add(
                (a[j] as u32)
                    .wrapping_mul(b[i + 32 - j] as u32)
                    .wrapping_mul(38),
            );
        }
        r[i] = c as u8;
    }

    r[31] &= 127;
    c = (c >> 7).wrapping_mul(19);
    for byte in r.iter_mut() {
        c = c.wrapping_add(*byte as u32);
        *byte = c as u8;
        c >>= 8;
    }
    r
}

/// `mul_c(r, a, c)`: product of a field element with a small scalar
/// `c`. Documented usage regime is `c <= 2^24`; above that the 32-bit
/// carry accumulator can overflow.
pub(crate) fn mul_c(a: &[u8; 32], scalar: u32) -> [u8; 32] {
    let mut r = [0u8; 32];
    let mut c: u32 = 0;

    for i in 0..32 {
        c >>= 8;
        c = c.wrapping_add(scalar.wrapping_mul(a[i] as u32));
        r[i] = c as u8;
    }

    r[31] &= 127;
    c >>= 7;
    c = c.wrapping_mul(19);
    for byte in r.iter_mut() {
        c = c.wrapping_add(*byte as u32);
        *byte = c as u8;
        c >>= 8;
    }
    r
}

/// `inv_distinct(r, x)`: `x^(p-2) mod p` via Fermat's little theorem.
/// The exponent `p - 2 = 2^255 - 21` has binary pattern
/// `1^250 0 1 0 1 1`; the loop below realizes exactly that pattern,
/// alternating accumulators so no buffer ever needs to alias another.
/// Returns zero when `x` is zero (the chain has no division to fail).
pub(crate) fn inv_distinct(x: &[u8; 32]) -> [u8; 32] {
    // 1 1
    let mut s = mul_distinct(x, x);
    let mut r = mul_distinct(&s, x);

    // 1 x 248
    for _ in 0..248 {
        s = mul_distinct(&r, &r);
        r = mul_distinct(&s, x);
    }

    // 0
    s = mul_distinct(&r, &r);

    // 1
    r = mul_distinct(&s, &s);
    s = mul_distinct(&r, x);

    // 0
    r = mul_distinct(&s, &s);

    // 1
    s = mul_distinct(&r, &r);
    r = mul_distinct(&s, x);

    // 1
    s = mul_distinct(&r, &r);
    r = mul_distinct(&s, x);

    r
}

/// Raises `x` to the power `(p-5)/8 = 2^252 - 3`, a 252-bit exponent
/// with binary expansion `1^249 0 1`. Shared addition-chain shape with
/// [`inv_distinct`], just a shorter run and a different tail.
fn exp2523(x: &[u8; 32]) -> [u8; 32] {
    // 1 1
    let mut r = mul_distinct(x, x);
    let mut s = mul_distinct(&r, x);

    // 1 x 248
    for _ in 0..248 {
        r = mul_distinct(&s, &s);
        s = mul_distinct(&r, x);
    }

    // 0
    r = mul_distinct(&s, &s);

    // 1
    s = mul_distinct(&r, &r);
    r = mul_distinct(&s, x);

    r
}

/// `sqrt(r, a)`: Tonelli shortcut valid because `p = 5 (mod 8)`.
/// Returns a value whose square is `a` when `a` is a quadratic
/// residue, and whose square is `-a` otherwise; see spec.md §4.7 and
/// §7 for the caller-side verification this leaves undone.
pub(crate) fn sqrt(a: &[u8; 32]) -> [u8; 32] {
    // x = 2a
    let x = mul_c(a, 2);

    // v = x^((p-5)/8)
    let v = exp2523(&x);

    // i = 2a * v^2 - 1
    let v_sq = mul_distinct(&v, &v);
    let mut i = mul_distinct(&x, &v_sq);
    let one = {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        bytes
    };
    i = crate::field::sub_bytes(&i, &one);

    // r = a * v * i
    let av = mul_distinct(&v, a);
    mul_distinct(&av, &i)
}
