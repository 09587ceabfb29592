// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::NormalizedRegion;
use bytemuck::{Pod, Zeroable};

// Safety: The struct is `repr(C)` and all zeroes is four `0.0` edges.
unsafe impl Zeroable for NormalizedRegion {}

// Safety: The struct is `repr(C)`, made of four `f32`s with no padding, and
// every bit pattern is a valid `f32`.
unsafe impl Pod for NormalizedRegion {}
