// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Properties controlling shadow visibility and padding.

mod shadow_hidden;
mod shadow_padding;

pub use shadow_hidden::ShadowHidden;
pub use shadow_padding::ShadowPadding;
