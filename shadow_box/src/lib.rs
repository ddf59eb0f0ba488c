// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A drop-shadow container widget for the Masonry toolkit.
//!
//! [`ShadowBox`](widgets::ShadowBox) lays its children out inside padding
//! sized to fit a blurred, optionally offset, rounded drop shadow, and paints
//! that shadow behind them. The shadow's color, blur radius, offset and
//! corner radius can be set through builders, through [`WidgetMut`] setters,
//! through Masonry [properties], or loaded from a style-attribute bag
//! ([`ShadowAttrs`](attrs::ShadowAttrs)).
//!
//! [`WidgetMut`]: masonry::core::WidgetMut
//! [properties]: masonry::properties

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]
#![expect(elided_lifetimes_in_paths, reason = "Deferred: Noisy")]

pub use masonry::peniko::color::palette;

pub mod attrs;
pub mod properties;
pub mod widgets;

pub(crate) use masonry::accesskit;
pub(crate) use masonry::core;
pub(crate) use masonry::kurbo;
pub(crate) use masonry::peniko;
pub(crate) use masonry::vello;
#[cfg(test)]
pub(crate) use masonry_testing as testing;
