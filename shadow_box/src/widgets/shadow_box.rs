// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A container that paints a blurred drop shadow behind its children.

use std::any::TypeId;

use masonry::properties::BoxShadow;
use tracing::{Span, trace_span, warn};

use crate::accesskit::{Node, Role};
use crate::attrs::ShadowAttrs;
use crate::core::{
    AccessCtx, BoxConstraints, ChildrenIds, LayoutCtx, NewWidget, NoAction, PaintCtx,
    PropertiesMut, PropertiesRef, RegisterCtx, UpdateCtx, Widget, WidgetId, WidgetMut, WidgetPod,
};
use crate::kurbo::{Affine, Insets, Point, Rect, Size};
use crate::peniko::Fill;
use crate::peniko::color::{AlphaColor, Srgb};
use crate::properties::{ShadowHidden, ShadowPadding};
use crate::vello::Scene;

/// A container that paints a blurred, optionally offset, rounded drop shadow
/// behind its children.
///
/// The container reserves padding on each side so the blur has room to spill
/// without overlapping neighboring widgets. By default each side's padding is
/// one blur radius, shifted by the shadow offset along that axis; explicit
/// per-side widths can be set with [`shadow_padding`](Self::shadow_padding).
///
/// The shadow starts out hidden and is revealed with
/// [`hidden(false)`](Self::hidden) or
/// [`set_shadow_hidden`](Self::set_shadow_hidden). Hiding the shadow skips
/// the fill but keeps the padding, so toggling it never moves the children.
///
/// Children all receive the same constraints and are stacked at the padded
/// origin, back to front; the container sizes itself to the largest child
/// plus padding.
///
/// Shadow styling can also be driven through properties: [`BoxShadow`],
/// [`ShadowHidden`] and [`ShadowPadding`] each override the corresponding
/// built-in value when set on the widget.
pub struct ShadowBox {
    children: Vec<WidgetPod<dyn Widget>>,
    shadow: BoxShadow,
    rect_radius: f64,
    hidden: bool,
    padding: ShadowPadding,
    // Updated in `layout`; used by the `corner_radius` getter.
    size: Size,
}

// --- MARK: BUILDERS ---
impl ShadowBox {
    /// Constructs a container with a single child and default shadow styling.
    pub fn new(child: NewWidget<impl Widget + ?Sized>) -> Self {
        Self::empty().with_child(child)
    }

    /// Constructs a container with a single child that is already wrapped in
    /// a [`WidgetPod`].
    pub fn new_pod(child: WidgetPod<dyn Widget>) -> Self {
        Self::empty().with_child_pod(child)
    }

    /// Constructs a container without children.
    pub fn empty() -> Self {
        Self {
            children: Vec::new(),
            shadow: BoxShadow::default(),
            rect_radius: 0.,
            hidden: true,
            padding: ShadowPadding::default(),
            size: Size::ZERO,
        }
    }

    /// Constructs a container with a single child, styled from an attribute bag.
    pub fn from_attrs(child: NewWidget<impl Widget + ?Sized>, attrs: &ShadowAttrs) -> Self {
        Self {
            children: vec![child.erased().to_pod()],
            shadow: attrs.box_shadow(),
            rect_radius: attrs.rect_radius,
            hidden: attrs.shadow_hidden,
            padding: attrs.padding(),
            size: Size::ZERO,
        }
    }

    /// Appends a child widget.
    /// Children are painted back to front, in the order they are added.
    pub fn with_child(self, child: NewWidget<impl Widget + ?Sized>) -> Self {
        self.with_child_pod(child.erased().to_pod())
    }

    /// Appends a child widget pod.
    ///
    /// See also [`Self::with_child`] if the widget is not already wrapped in a [`WidgetPod`].
    pub fn with_child_pod(mut self, child: WidgetPod<dyn Widget>) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style method for setting the shadow color.
    pub fn with_shadow_color(mut self, color: AlphaColor<Srgb>) -> Self {
        self.shadow.color = color;
        self
    }

    /// Builder-style method for setting the blur radius of the shadow,
    /// in logical pixels.
    pub fn with_shadow_radius(mut self, radius: f64) -> Self {
        self.shadow.blur_radius = radius;
        self
    }

    /// Builder-style method for setting the offset from the content to the shadow.
    ///
    /// The offset shifts which sides receive the derived padding; the fill
    /// itself stays within the container's bounds.
    pub fn with_shadow_offset(mut self, offset: impl Into<Point>) -> Self {
        self.shadow.offset = offset.into();
        self
    }

    /// Builder-style method for rounding off the shadow's corners.
    ///
    /// The radius is measured on the unpadded container; the painted radius
    /// shrinks as the blur padding eats into the container's height.
    pub fn rounded(mut self, radius: f64) -> Self {
        self.rect_radius = radius;
        self
    }

    /// Builder-style method for setting whether the shadow starts out hidden.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Builder-style method for overriding the derived per-side padding.
    pub fn shadow_padding(mut self, padding: ShadowPadding) -> Self {
        self.padding = padding;
        self
    }
}

// --- MARK: GETTERS ---
impl ShadowBox {
    /// The shadow color.
    pub fn shadow_color(&self) -> AlphaColor<Srgb> {
        self.shadow.color
    }

    /// The blur radius of the shadow, in logical pixels.
    pub fn shadow_radius(&self) -> f64 {
        self.shadow.blur_radius
    }

    /// The offset from the content to the shadow.
    pub fn shadow_offset(&self) -> Point {
        self.shadow.offset
    }

    /// Whether the shadow is currently hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The corner radius the shadow is painted with, in logical pixels.
    ///
    /// Derived from the configured radius, shrunk in proportion to the share
    /// of the container's height consumed by the blur padding. Only
    /// meaningful once the widget has been laid out.
    pub fn corner_radius(&self) -> f64 {
        effective_corner_radius(
            self.rect_radius,
            self.shadow.blur_radius.max(0.),
            self.size.height,
        )
    }
}

// --- MARK: WIDGETMUT ---
impl ShadowBox {
    /// Add a child widget.
    /// Children are painted back to front, in the order they are added.
    ///
    /// See also [`with_child`][Self::with_child].
    pub fn add_child(this: &mut WidgetMut<'_, Self>, child: NewWidget<impl Widget + ?Sized>) {
        Self::add_child_pod(this, child.erased().to_pod());
    }

    /// Add a child widget pod.
    pub fn add_child_pod(this: &mut WidgetMut<'_, Self>, widget: WidgetPod<dyn Widget>) {
        this.widget.children.push(widget);
        this.ctx.children_changed();
    }

    /// Remove a child.
    pub fn remove_child(this: &mut WidgetMut<'_, Self>, idx: usize) {
        let child = this.widget.children.remove(idx);
        this.ctx.remove_child(child);
    }

    /// Get a mutable reference to a child.
    pub fn child_mut<'t>(
        this: &'t mut WidgetMut<'_, Self>,
        idx: usize,
    ) -> Option<WidgetMut<'t, dyn Widget>> {
        let child = this.widget.children.get_mut(idx)?;
        Some(this.ctx.get_mut(child))
    }

    /// Set the shadow color.
    pub fn set_shadow_color(this: &mut WidgetMut<'_, Self>, color: AlphaColor<Srgb>) {
        this.widget.shadow.color = color;
        this.ctx.request_paint_only();
    }

    /// Set the blur radius of the shadow, in logical pixels.
    ///
    /// The derived padding follows the radius, so this relayouts the children.
    pub fn set_shadow_radius(this: &mut WidgetMut<'_, Self>, radius: f64) {
        this.widget.shadow.blur_radius = radius;
        this.ctx.request_layout();
    }

    /// Set the horizontal offset from the content to the shadow.
    pub fn set_shadow_offset_x(this: &mut WidgetMut<'_, Self>, offset: f64) {
        this.widget.shadow.offset.x = offset;
        this.ctx.request_layout();
    }

    /// Set the vertical offset from the content to the shadow.
    pub fn set_shadow_offset_y(this: &mut WidgetMut<'_, Self>, offset: f64) {
        this.widget.shadow.offset.y = offset;
        this.ctx.request_layout();
    }

    /// Show or hide the shadow.
    ///
    /// The padding is kept while hidden, so toggling this never moves the
    /// children.
    pub fn set_shadow_hidden(this: &mut WidgetMut<'_, Self>, hidden: bool) {
        this.widget.hidden = hidden;
        this.ctx.request_paint_only();
    }

    /// Set the corner radius of the shadow rect.
    ///
    /// See also [`rounded`][Self::rounded].
    pub fn set_rounded(this: &mut WidgetMut<'_, Self>, radius: f64) {
        this.widget.rect_radius = radius;
        this.ctx.request_paint_only();
    }
}

// --- MARK: INTERNALS ---

/// The rect the shadow is painted over: the container's bounds inset by one
/// blur radius on each side, so the blur tail fades out near the edges.
fn shadow_rect(size: Size, blur_radius: f64) -> Rect {
    Rect::new(
        blur_radius,
        blur_radius,
        size.width - blur_radius,
        size.height - blur_radius,
    )
}

/// The painted corner radius: `rect_radius` scaled by the share of `height`
/// left after removing one blur radius from each end, rounded down.
fn effective_corner_radius(rect_radius: f64, blur_radius: f64, height: f64) -> f64 {
    if height <= 0. || rect_radius < 0. {
        return 0.;
    }
    let scaled = (height - 2. * blur_radius) / height * rect_radius;
    scaled.floor().max(0.)
}

// --- MARK: IMPL WIDGET ---
impl Widget for ShadowBox {
    type Action = NoAction;

    fn register_children(&mut self, ctx: &mut RegisterCtx<'_>) {
        for child in &mut self.children {
            ctx.register_child(child);
        }
    }

    fn property_changed(&mut self, ctx: &mut UpdateCtx<'_>, property_type: TypeId) {
        BoxShadow::prop_changed(ctx, property_type);
        ShadowPadding::prop_changed(ctx, property_type);
        ShadowHidden::prop_changed(ctx, property_type);
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx<'_>,
        props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let shadow = if props.contains::<BoxShadow>() {
            *props.get::<BoxShadow>()
        } else {
            self.shadow
        };
        let padding = if props.contains::<ShadowPadding>() {
            *props.get::<ShadowPadding>()
        } else {
            self.padding
        };
        let insets = padding.resolve(&shadow);

        let padding_size = Size::new(insets.x0 + insets.x1, insets.y0 + insets.y1);
        let child_bc = bc.shrink(padding_size);
        let origin = Point::new(insets.x0, insets.y0);

        let mut content = Size::ZERO;
        for child in &mut self.children {
            let child_size = ctx.run_layout(child, &child_bc);
            content.width = content.width.max(child_size.width);
            content.height = content.height.max(child_size.height);
        }
        for child in &mut self.children {
            ctx.place_child(child, origin);
        }

        let size = if self.children.is_empty() {
            bc.constrain(padding_size)
        } else {
            content + padding_size
        };

        // The Gaussian tail reaches roughly 2.5 standard deviations past the
        // shadow rect, which is itself inset by one blur radius.
        let blur_radius = shadow.blur_radius.max(0.);
        ctx.set_paint_insets(Insets::uniform(1.5 * blur_radius));

        if size.width.is_infinite() {
            warn!("ShadowBox is returning an infinite width.");
        }
        if size.height.is_infinite() {
            warn!("ShadowBox is returning an infinite height.");
        }

        self.size = size;
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, props: &PropertiesRef<'_>, scene: &mut Scene) {
        let hidden = if props.contains::<ShadowHidden>() {
            props.get::<ShadowHidden>().0
        } else {
            self.hidden
        };
        if hidden {
            return;
        }

        let shadow = if props.contains::<BoxShadow>() {
            *props.get::<BoxShadow>()
        } else {
            self.shadow
        };
        if !shadow.is_visible() {
            return;
        }

        let size = ctx.size();
        if size.width <= 0. || size.height <= 0. {
            return;
        }

        let blur_radius = shadow.blur_radius.max(0.);
        let rect = shadow_rect(size, blur_radius);
        let corner_radius = effective_corner_radius(self.rect_radius, blur_radius, size.height);

        if blur_radius == 0. {
            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                shadow.color,
                None,
                &rect.to_rounded_rect(corner_radius),
            );
        } else {
            scene.draw_blurred_rounded_rect(
                Affine::IDENTITY,
                rect,
                shadow.color,
                corner_radius,
                blur_radius,
            );
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::GenericContainer
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        _node: &mut Node,
    ) {
    }

    fn children_ids(&self) -> ChildrenIds {
        self.children.iter().map(|child| child.id()).collect()
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("ShadowBox", id = id.trace())
    }
}
