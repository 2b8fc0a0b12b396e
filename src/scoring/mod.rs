// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scores only matter for the `relevance` sort. The date sorts ignore them
//! entirely, and the basic search widget never computes them.

mod core;
pub mod ranking;

pub use core::*;
