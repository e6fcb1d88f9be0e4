// -*- mode: rust; -*-
//
// This file is part of f25519.
// Copyright (c) 2025 The f25519 Developers
// See LICENSE for licensing information.

//! Canonical encodings of the additive and multiplicative identities.
//!
//! Grounded on `f25519_zero`/`f25519_one` in
//! `examples/original_source/src/f25519.c`.

use crate::field::FieldElement;

/// The additive identity, encoded canonically as 32 zero bytes.
pub const ZERO: FieldElement = FieldElement::from_bytes_raw([0u8; 32]);

/// The multiplicative identity, encoded canonically as `1` in the low byte.
pub const ONE: FieldElement = FieldElement::from_bytes_raw({
    let mut bytes = [0u8; 32];
    bytes[0] = 1;
    bytes
});
