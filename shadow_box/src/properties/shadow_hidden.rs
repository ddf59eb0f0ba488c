// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::TypeId;

use crate::core::{Property, UpdateCtx};

/// Whether [`ShadowBox`](crate::widgets::ShadowBox) skips painting its shadow.
///
/// Defaults to `true`: the shadow is only drawn once explicitly revealed.
/// Hiding the shadow does not release the padding reserved for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadowHidden(pub bool);

impl Property for ShadowHidden {
    fn static_default() -> &'static Self {
        static DEFAULT: ShadowHidden = ShadowHidden(true);
        &DEFAULT
    }
}

impl Default for ShadowHidden {
    fn default() -> Self {
        *Self::static_default()
    }
}

impl ShadowHidden {
    /// Helper function to be called in [`Widget::property_changed`](crate::core::Widget::property_changed).
    pub fn prop_changed(ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        if property_type != TypeId::of::<Self>() {
            return;
        }
        ctx.request_paint_only();
    }
}
