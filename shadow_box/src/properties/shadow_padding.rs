// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::TypeId;

use masonry::properties::BoxShadow;

use crate::core::{Property, UpdateCtx};
use crate::kurbo::Insets;

/// Per-side padding overrides for [`ShadowBox`](crate::widgets::ShadowBox).
///
/// Each side is either an explicit width in logical pixels, or the sentinel
/// [`AUTO`](Self::AUTO) (any negative value) meaning the side's padding is
/// derived from the shadow: one blur radius, shifted by the shadow offset
/// along that axis.
///
/// An explicit width larger than the blur radius is also treated as
/// [`AUTO`](Self::AUTO), since the blur can never fill that much space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowPadding {
    /// Padding for the left edge, or [`AUTO`](Self::AUTO).
    pub left: f64,
    /// Padding for the top edge, or [`AUTO`](Self::AUTO).
    pub top: f64,
    /// Padding for the right edge, or [`AUTO`](Self::AUTO).
    pub right: f64,
    /// Padding for the bottom edge, or [`AUTO`](Self::AUTO).
    pub bottom: f64,
}

impl Property for ShadowPadding {
    fn static_default() -> &'static Self {
        static DEFAULT: ShadowPadding = ShadowPadding::auto();
        &DEFAULT
    }
}

impl Default for ShadowPadding {
    fn default() -> Self {
        *Self::static_default()
    }
}

impl ShadowPadding {
    /// Sentinel value requesting the derived padding for a side.
    pub const AUTO: f64 = -1.0;

    /// Creates a new `ShadowPadding` with an explicit width for each edge.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a new `ShadowPadding` deriving every side from the shadow.
    pub const fn auto() -> Self {
        Self::new(Self::AUTO, Self::AUTO, Self::AUTO, Self::AUTO)
    }

    /// Helper function to be called in [`Widget::property_changed`](crate::core::Widget::property_changed).
    pub fn prop_changed(ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        if property_type != TypeId::of::<Self>() {
            return;
        }
        ctx.request_layout();
    }

    fn side(set: f64, derived: f64, blur_radius: f64) -> f64 {
        if set < 0. || set > blur_radius {
            derived
        } else {
            set
        }
    }

    /// The signed padding this override set produces for a given shadow.
    ///
    /// A derived side is negative when the offset along its axis exceeds the
    /// blur radius. Layout should use [`resolve`](Self::resolve) instead.
    pub fn insets(&self, shadow: &BoxShadow) -> Insets {
        let blur_radius = shadow.blur_radius.max(0.);
        Insets {
            x0: Self::side(self.left, blur_radius - shadow.offset.x, blur_radius),
            y0: Self::side(self.top, blur_radius - shadow.offset.y, blur_radius),
            x1: Self::side(self.right, blur_radius + shadow.offset.x, blur_radius),
            y1: Self::side(self.bottom, blur_radius + shadow.offset.y, blur_radius),
        }
    }

    /// The padding applied during layout: [`insets`](Self::insets) with each
    /// side clamped to zero.
    pub fn resolve(&self, shadow: &BoxShadow) -> Insets {
        let insets = self.insets(shadow);
        Insets {
            x0: insets.x0.max(0.),
            y0: insets.y0.max(0.),
            x1: insets.x1.max(0.),
            y1: insets.y1.max(0.),
        }
    }
}
