// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The widgets provided by this crate.

mod shadow_box;

pub use shadow_box::ShadowBox;
