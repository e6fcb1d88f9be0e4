// -*- mode: rust; -*-
//
// This file is part of f25519.
// Copyright (c) 2025 The f25519 Developers
// See LICENSE for licensing information.

//! Constant-time arithmetic in the prime field GF(p), p = 2^255 - 19,
//! the field underlying Curve25519.
//!
//! This crate implements exactly the operations higher-level
//! elliptic-curve code needs: addition, subtraction, negation,
//! multiplication (by a field element, a small scalar, and via an
//! alternate 17-bit-limb "DSP" multiplier), multiplicative inversion,
//! square root, equality, conditional selection, and canonical
//! reduction. It does not implement curve-point arithmetic, the
//! Ed25519/X25519 protocols, or any I/O; those are the job of callers
//! built on top of this crate.
//!
//! Field elements are 32-byte little-endian encodings. Most operations
//! tolerate "unreduced" inputs (numerically up to `2^256 - 1`) and
//! produce outputs that are at most one conditional subtraction away
//! from the canonical representative in `[0, p)`; call
//! [`FieldElement::normalize`] to obtain that representative.
//!
//! Every operation here is constant-time: control flow and memory
//! access depend only on which operation is called, never on operand
//! bits. The `dsp17` multiplier backend is the one place that needed
//! active hardening (the source's near-*p* special case in its
//! alternate multiplier) to meet that bar.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod backend;
mod constants;
mod field;

pub use crate::constants::{ONE, ZERO};
pub use crate::field::FieldElement;
