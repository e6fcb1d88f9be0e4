// -*- mode: rust; -*-
//
// This file is part of f25519.
// Copyright (c) 2025 The f25519 Developers
// See LICENSE for licensing information.

//! Multiplier backends.
//!
//! `curve25519-dalek` picks among several serial and SIMD backends at
//! compile time via `cfg(curve25519_dalek_backend = ..)`. This crate's
//! field has two independent multiplier implementations for a different
//! reason than performance tuning: [`schoolbook`] is the general-purpose
//! multiplier that tolerates the lazily-reduced (`< 2p`) operands every
//! other field operation produces, while [`dsp17`] models a 17x17-bit
//! hardware datapath and requires normalized operands. They are not
//! interchangeable backends behind one cfg switch — both are always
//! compiled, [`FieldElement::mul`](crate::FieldElement::mul) always uses
//! [`schoolbook`], and [`FieldElement::mul_hw`](crate::FieldElement::mul_hw)
//! always uses [`dsp17`]. Tests cross-check that the two agree whenever
//! `dsp17`'s precondition (normalized operands) holds.

pub(crate) mod dsp17;
pub(crate) mod schoolbook;
