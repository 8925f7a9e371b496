// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::num::NonZeroUsize;

use peniko::kurbo::{Point, Size, Vec2};

use crate::{
    container_offset, hit_test, DebugOverlay, LabelStyle, LabelText, LaidOutText, LayoutRequest,
    LineBreak, LinkHit, TextAlignment, TextLayoutEngine,
};

/// When a [`LinkLabel`] lays its text out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutPolicy {
    /// Keep one layout for the lifetime of the label, rebuilt lazily after the text, bounds
    /// or style change.
    #[default]
    Persistent,
    /// Lay the text out afresh for every tap and drop the layout once the tap is resolved.
    ///
    /// Taps can never see a stale layout, at the cost of laying out on every tap.
    PerTap,
}

/// Identifies a handler registered with [`LinkLabel::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler<E> = Box<dyn FnMut(&LinkLabel<E>, &LinkHit)>;

/// A text label whose links can be tapped.
///
/// The label is a plain controller: the embedding view forwards bounds changes, text changes
/// and taps (in view-local coordinates) to it, and the label calls back every subscribed
/// handler when a tap lands on a link.
///
/// ```
/// # use link_label::{LinkLabel, LabelText, Link, TextLayoutEngine};
/// # fn demo<E: TextLayoutEngine>(engine: E) {
/// use link_label::kurbo::{Point, Size};
///
/// let mut text = LabelText::new("Hello! This is link".to_string());
/// text.set_as_link("link", Link::from("https://www.google1.com"));
///
/// let mut label = LinkLabel::new(engine).with_bounds(Size::new(300.0, 40.0));
/// label.set_text(Some(text));
/// label.subscribe(|_label, hit| println!("tapped {}", hit.link));
/// label.handle_tap(Point::new(120.0, 20.0));
/// # }
/// ```
pub struct LinkLabel<E: TextLayoutEngine> {
    engine: E,
    text: Option<LabelText>,
    style: LabelStyle,
    bounds: Size,
    policy: LayoutPolicy,
    layout: Option<E::Layout>,
    debug: bool,
    handlers: Vec<(HandlerId, Handler<E>)>,
    next_handler: u64,
}

impl<E: TextLayoutEngine> fmt::Debug for LinkLabel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkLabel")
            .field("text", &self.text)
            .field("style", &self.style)
            .field("bounds", &self.bounds)
            .field("policy", &self.policy)
            .field("has_layout", &self.layout.is_some())
            .field("debug", &self.debug)
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl<E: TextLayoutEngine> LinkLabel<E> {
    /// Create an empty label with zero bounds that lays out with `engine`.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            text: None,
            style: LabelStyle::default(),
            bounds: Size::ZERO,
            policy: LayoutPolicy::default(),
            layout: None,
            debug: false,
            handlers: Vec::new(),
            next_handler: 0,
        }
    }

    /// Builder method for setting the layout policy.
    pub fn with_policy(mut self, policy: LayoutPolicy) -> Self {
        self.set_policy(policy);
        self
    }

    /// Builder method for setting the style.
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Builder method for setting the bounds.
    pub fn with_bounds(mut self, bounds: Size) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Builder method for setting the text.
    pub fn with_text(mut self, text: LabelText) -> Self {
        self.set_text(Some(text));
        self
    }

    /// The layout engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the layout engine, e.g. to register fonts.
    ///
    /// This invalidates the current layout.
    pub fn engine_mut(&mut self) -> &mut E {
        self.invalidate("engine changed");
        &mut self.engine
    }

    /// The attributed text, if any.
    pub fn text(&self) -> Option<&LabelText> {
        self.text.as_ref()
    }

    /// Replace the attributed text. `None` clears the label; taps then never hit.
    pub fn set_text(&mut self, text: Option<LabelText>) {
        self.text = text;
        self.invalidate("text changed");
    }

    /// The style.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: LabelStyle) {
        if self.style != style {
            self.style = style;
            self.invalidate("style changed");
        }
    }

    /// Set the text alignment.
    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.set_style(self.style.clone().with_alignment(alignment));
    }

    /// Set the line break mode.
    pub fn set_line_break(&mut self, line_break: LineBreak) {
        self.set_style(self.style.clone().with_line_break(line_break));
    }

    /// Limit the number of lines. `0` means no limit.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.set_style(self.style.clone().with_max_lines(max_lines));
    }

    /// The maximum number of lines, if limited.
    pub fn max_lines(&self) -> Option<NonZeroUsize> {
        self.style.max_lines
    }

    /// The bounds, in view units.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Resize the label. The layout container always matches the bounds.
    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.invalidate("bounds changed");
        }
    }

    /// The layout policy.
    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    /// Change the layout policy.
    pub fn set_policy(&mut self, policy: LayoutPolicy) {
        self.policy = policy;
    }

    /// Whether the debug overlay is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Enable or disable the debug overlay.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Register a handler, called once for every tap that lands on a link.
    ///
    /// Handlers run in subscription order and receive the label the tap happened on.
    pub fn subscribe(&mut self, handler: impl FnMut(&Self, &LinkHit) + 'static) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// The current layout, built if needed. `None` if the label has no text.
    ///
    /// The layout is kept until the next change to the text, bounds or style, whatever the
    /// [`LayoutPolicy`]; the policy only decides what taps use.
    pub fn layout(&mut self) -> Option<&E::Layout> {
        self.ensure_layout();
        self.layout.as_ref()
    }

    /// The offset of the layout's coordinate space inside the bounds.
    pub fn container_offset(&mut self) -> Option<Vec2> {
        let alignment = self.style.alignment;
        let bounds = self.bounds;
        let layout = self.layout()?;
        Some(container_offset(alignment, bounds, layout.used_rect()))
    }

    /// Resolve a tap at `point`, in view-local coordinates.
    ///
    /// When the tap lands on a link, every handler is called and the hit is returned.
    /// Otherwise nothing is called and `None` is returned.
    pub fn handle_tap(&mut self, point: Point) -> Option<LinkHit> {
        let alignment = self.style.alignment;
        let hit = match self.policy {
            LayoutPolicy::Persistent => {
                self.ensure_layout();
                let layout = self.layout.as_ref()?;
                let text = self.text.as_ref()?;
                hit_test(layout, text, alignment, self.bounds, point)
            }
            LayoutPolicy::PerTap => {
                let text = self.text.as_ref()?;
                let request = LayoutRequest {
                    text,
                    style: &self.style,
                    container: self.bounds,
                };
                tracing::trace!(target: "link_label", "laying out for tap");
                let layout = self.engine.layout(&request);
                hit_test(&layout, text, alignment, self.bounds, point)
            }
        };
        match &hit {
            Some(hit) => {
                tracing::debug!(
                    target: "link_label",
                    x = point.x,
                    y = point.y,
                    index = hit.index,
                    range = ?hit.range,
                    link = %hit.link,
                    "link tapped"
                );
                self.notify(hit);
            }
            None => tracing::trace!(target: "link_label", x = point.x, y = point.y, "no link at tap"),
        }
        hit
    }

    /// Glyph boxes in view coordinates, when debugging is enabled and there is text.
    pub fn debug_overlay(&mut self) -> Option<DebugOverlay> {
        if !self.debug {
            return None;
        }
        let offset = self.container_offset()?;
        let layout = self.layout.as_ref()?;
        Some(DebugOverlay::new(layout, offset))
    }

    fn ensure_layout(&mut self) {
        if self.layout.is_some() {
            return;
        }
        let Some(text) = self.text.as_ref() else {
            return;
        };
        let request = LayoutRequest {
            text,
            style: &self.style,
            container: self.bounds,
        };
        tracing::trace!(
            target: "link_label",
            width = self.bounds.width,
            height = self.bounds.height,
            "building layout"
        );
        self.layout = Some(self.engine.layout(&request));
    }

    fn invalidate(&mut self, reason: &'static str) {
        if self.layout.take().is_some() {
            tracing::trace!(target: "link_label", reason, "dropped layout");
        }
    }

    fn notify(&mut self, hit: &LinkHit) {
        // Handlers only get `&Self`, so none can be added or removed while they run.
        let mut handlers = core::mem::take(&mut self.handlers);
        for (_, handler) in &mut handlers {
            handler(self, hit);
        }
        self.handlers = handlers;
    }
}
