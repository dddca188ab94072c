// Copyright 2025 John Doe
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Micro-benchmarks comparing three typing disciplines for the same 2D
//! `Circle` value: raw scalar fields, `Vector2D`-composed fields, and
//! tag-distinct strong wrappers.
//!
//! Each variant in [`models`] exposes the same surface (direct constructor,
//! fluent chain + `build()`, and three bulk-accumulation routines) so the
//! criterion benches can compare construction cost like-for-like.

pub mod models;

pub use models::{Discipline, CATALOG, CREATION_COUNT};
