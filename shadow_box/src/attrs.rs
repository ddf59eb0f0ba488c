// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Style-attribute ingestion for [`ShadowBox`](crate::widgets::ShadowBox).

use masonry::properties::BoxShadow;
use serde::Deserialize;

use crate::kurbo::Point;
use crate::peniko::color::{AlphaColor, Srgb};
use crate::properties::ShadowPadding;

/// The style-attribute bag for [`ShadowBox`](crate::widgets::ShadowBox).
///
/// Attribute names match the ones used by existing style sheets, including
/// the historical `shadowRadio` / `rectRadio` spellings; the corrected
/// `shadowRadius` / `rectRadius` spellings are accepted as aliases. Unset
/// attributes take their defaults: the shadow starts hidden and transparent,
/// radii and offsets are zero, and every padding is derived.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowAttrs {
    /// Whether the shadow starts out hidden.
    pub shadow_hidden: bool,
    /// The shadow color, as packed 32-bit RGBA.
    pub shadow_color: u32,
    /// The blur radius of the shadow, in logical pixels.
    #[serde(rename = "shadowRadio", alias = "shadowRadius")]
    pub shadow_radius: f64,
    /// The horizontal offset from the content to the shadow.
    pub shadow_offset_x: f64,
    /// The vertical offset from the content to the shadow.
    pub shadow_offset_y: f64,
    /// The corner radius of the shadow rect, in logical pixels.
    #[serde(rename = "rectRadio", alias = "rectRadius")]
    pub rect_radius: f64,
    /// Padding override for the left edge, or [`ShadowPadding::AUTO`].
    pub shadow_padding_left: f64,
    /// Padding override for the top edge, or [`ShadowPadding::AUTO`].
    pub shadow_padding_top: f64,
    /// Padding override for the right edge, or [`ShadowPadding::AUTO`].
    pub shadow_padding_right: f64,
    /// Padding override for the bottom edge, or [`ShadowPadding::AUTO`].
    pub shadow_padding_bottom: f64,
}

impl Default for ShadowAttrs {
    fn default() -> Self {
        Self {
            shadow_hidden: true,
            shadow_color: 0,
            shadow_radius: 0.,
            shadow_offset_x: 0.,
            shadow_offset_y: 0.,
            rect_radius: 0.,
            shadow_padding_left: ShadowPadding::AUTO,
            shadow_padding_top: ShadowPadding::AUTO,
            shadow_padding_right: ShadowPadding::AUTO,
            shadow_padding_bottom: ShadowPadding::AUTO,
        }
    }
}

impl ShadowAttrs {
    /// The shadow color, unpacked.
    pub fn color(&self) -> AlphaColor<Srgb> {
        let [r, g, b, a] = self.shadow_color.to_be_bytes();
        AlphaColor::from_rgba8(r, g, b, a)
    }

    /// The shadow these attributes describe.
    pub fn box_shadow(&self) -> BoxShadow {
        BoxShadow::new(
            self.color(),
            Point::new(self.shadow_offset_x, self.shadow_offset_y),
        )
        .blur(self.shadow_radius)
    }

    /// The per-side padding overrides these attributes describe.
    pub fn padding(&self) -> ShadowPadding {
        ShadowPadding::new(
            self.shadow_padding_left,
            self.shadow_padding_top,
            self.shadow_padding_right,
            self.shadow_padding_bottom,
        )
    }
}
