// -*- mode: rust; -*-
//
// This file is part of f25519.
// Copyright (c) 2025 The f25519 Developers
// See LICENSE for licensing information.

//! Universal properties from spec.md §8, run over randomly drawn
//! operands. Mirrors the structure of
//! `examples/original_source/tests/test_f25519.c` (fixed vectors plus
//! randomized checks) but expressed with `rand`, the crate's sole
//! permitted external collaborator for fuzz-style testing.
//!
//! Property 11 (constant-time latency) is a statistical timing claim,
//! not something a unit test can assert reliably without a dedicated
//! timing harness and a noise-free environment; it is intentionally
//! not encoded here; see spec.md §5 and §9 for the discipline itself.
//!
//! Property 6 ("agreement of multipliers") only needs `mul` and
//! `mul_hw`: this crate exposes `mul_distinct` purely as an internal
//! detail of `mul` (see DESIGN.md's "Open Question decisions"), so
//! there is no separate public entry point to cross-check it against.

use f25519::FieldElement;
use rand::RngCore;
use rand_core::OsRng;

const TRIALS: usize = 200;

fn random_element() -> FieldElement {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    FieldElement::from_bytes(&bytes)
}

fn random_scalar_element(max_exclusive: u32) -> (FieldElement, u32) {
    let k = OsRng.next_u32() % max_exclusive;
    (FieldElement::from_u32(k), k)
}

#[test]
fn normalize_is_idempotent() {
    for _ in 0..TRIALS {
        let x = random_element();
        let once = x.normalize();
        let twice = once.normalize();
        assert_eq!(once, twice);
    }
}

#[test]
fn add_sub_round_trip() {
    for _ in 0..TRIALS {
        let a = random_element();
        let b = random_element();
        let c = random_element();
        let lhs = ((&a + &b) - c).normalize();
        let lhs = (&lhs - &a).normalize();
        let lhs = (&lhs + &c).normalize();
        assert_eq!(lhs, b.normalize());
    }
}

#[test]
fn mul_c_by_two_matches_doubling() {
    for _ in 0..TRIALS {
        let a = random_element();
        assert_eq!(a.mul_c(2).normalize(), (&a + &a).normalize());
    }
}

#[test]
fn multipliers_agree_on_normalized_operands() {
    for _ in 0..TRIALS {
        let a = random_element().normalize();
        let b = random_element().normalize();
        let via_schoolbook = a.mul(&b).normalize();
        let via_dsp17 = a.mul_hw(&b).normalize();
        assert_eq!(via_schoolbook, via_dsp17);

        let (scalar_elem, k) = random_scalar_element(1 << 24);
        let via_scalar = a.mul_c(k).normalize();
        let via_general = a.mul(&scalar_elem).normalize();
        assert_eq!(via_scalar, via_general);
    }
}

#[test]
fn multiplication_distributes_over_addition() {
    for _ in 0..TRIALS {
        let x = random_element();
        let a = random_element();
        let b = random_element();
        let lhs = (x.mul(&a) + x.mul(&b)).normalize();
        let rhs = x.mul(&(&a + &b)).normalize();
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn nonzero_elements_invert_to_one() {
    let one = FieldElement::one();
    let mut found = 0;
    while found < TRIALS {
        let a = random_element().normalize();
        if a == FieldElement::zero() {
            continue;
        }
        let product = a.mul(&a.invert()).normalize();
        assert_eq!(product, one);
        found += 1;
    }
}

#[test]
fn square_roots_of_squares_are_correct() {
    for _ in 0..TRIALS {
        let x = random_element().normalize();
        let y = x.mul(&x).normalize();

        let r1 = y.sqrt().normalize();
        let r2 = (-r1).normalize();

        assert_eq!(r1.mul(&r1).normalize(), y);
        assert_eq!(r2.mul(&r2).normalize(), y);
        assert_ne!(r1, r2);
        assert!(r1 == x || r2 == x);
    }
}

#[test]
fn mul_is_alias_safe_by_construction() {
    // FieldElement is Copy, so there is no C-style buffer aliasing
    // hazard to test for: `a.mul(&b)` can never observe a partially
    // overwritten operand the way `f25519_mul(a, a, b)` could in the
    // source. This checks the property spec.md §8 #10 asks for still
    // holds: computing into a fresh binding and copying over agrees
    // with computing directly.
    for _ in 0..TRIALS {
        let a = random_element();
        let b = random_element();
        let direct = a.mul(&b);
        let via_temp = {
            let t = a.mul(&b);
            t
        };
        assert_eq!(direct, via_temp);
    }
}
