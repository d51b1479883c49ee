// SPDX-License-Identifier: MPL-2.0
//! Reactive binding layer.
//!
//! Orchestrates the session controller: observes the enabled flag,
//! refreshes the reference point when the viewport resizes, re-resolves the
//! target element, and manages the press/pointer listener lifecycle
//! including teardown in the middle of a gesture.
//!
//! There is no implicit dependency tracking: the host (or an event bus)
//! invokes [`DragBinding::handle`] with an [`Event`] whenever the enabled
//! flag flips or input arrives, and applies the surfaced [`Effect`].

use iced::{event, mouse, window, Point, Size, Vector};
use log::{debug, trace};

use crate::layout::LayoutProvider;
use crate::session;
use crate::state::ListenerSet;

/// Reactive binding layer state.
#[derive(Debug, Clone)]
pub struct DragBinding {
    /// Selector used to re-resolve the target element.
    target_selector: String,

    /// Whether dragging is currently permitted.
    enabled: bool,

    /// Reference point captured at the last recalculation. Kept stale when
    /// the reference element is unmounted at a recalculation trigger.
    reference_point: Point,

    /// Whether the target selector matched at the last recalculation.
    /// Presses are ignored until a successful re-resolution.
    target_resolved: bool,

    /// Listener registration bookkeeping.
    listeners: ListenerSet,

    /// The session controller.
    session: session::State,

    /// Last known cursor position, for mapping raw button presses.
    cursor_position: Option<Point>,
}

/// Events observed by the binding layer.
#[derive(Debug, Clone)]
pub enum Event {
    /// The enabled flag changed (or was re-asserted).
    SetEnabled(bool),
    /// The viewport was resized.
    ViewportResized(Size),
    /// Press on the handle element.
    HandlePressed(Point),
    /// Pointer moved anywhere on the surface.
    PointerMoved(Point),
    /// Pointer released anywhere on the surface.
    PointerReleased,
}

/// Effects surfaced to the host.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// New translation to apply to the target element.
    TranslationChanged(Vector),
}

impl DragBinding {
    /// Creates the binding and registers the viewport resize listener.
    ///
    /// When `enabled` is true this also performs the initial recalculation
    /// and attaches the press listener, mirroring an enable-flag flip.
    pub fn attach(
        target_selector: impl Into<String>,
        enabled: bool,
        layout: &dyn LayoutProvider,
    ) -> Self {
        let mut binding = Self {
            target_selector: target_selector.into(),
            enabled: false,
            reference_point: Point::new(0.0, 0.0),
            target_resolved: false,
            listeners: ListenerSet::default(),
            session: session::State::default(),
            cursor_position: None,
        };
        binding.listeners.attach_resize();
        binding.handle(Event::SetEnabled(enabled), layout);
        binding
    }

    /// Handle a binding event.
    ///
    /// Note: Takes `Event` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, event: Event, layout: &dyn LayoutProvider) -> Effect {
        match event {
            Event::SetEnabled(enabled) => {
                self.enabled = enabled;
                if enabled {
                    self.recalculate(layout);
                    self.listeners.attach_press();
                } else {
                    // An in-flight gesture keeps its pointer listeners; only
                    // the press listener goes away, so no new gesture starts.
                    self.listeners.detach_press();
                }
                Effect::None
            }
            Event::ViewportResized(size) => {
                if self.enabled && self.listeners.resize {
                    trace!("viewport resized to {}x{}", size.width, size.height);
                    self.recalculate(layout);
                }
                Effect::None
            }
            Event::HandlePressed(position) => {
                if !self.listeners.press || !self.target_resolved {
                    trace!("press ignored: listener detached or target unresolved");
                    return Effect::None;
                }
                match layout.target_bounds(&self.target_selector) {
                    Some(target_bounds) => {
                        self.session.handle(session::Message::Pressed {
                            position,
                            target_bounds,
                            reference: self.reference_point,
                            viewport: layout.viewport_size(),
                        });
                        self.listeners.attach_pointer();
                    }
                    None => {
                        // Unmounted between recalculation and press.
                        debug!("press ignored: '{}' no longer resolves", self.target_selector);
                    }
                }
                Effect::None
            }
            Event::PointerMoved(position) => {
                if !self.listeners.pointer {
                    return Effect::None;
                }
                match self.session.handle(session::Message::Moved(position)) {
                    session::Effect::OffsetChanged(offset) => Effect::TranslationChanged(offset),
                    session::Effect::None => Effect::None,
                }
            }
            Event::PointerReleased => {
                if self.listeners.pointer {
                    self.session.handle(session::Message::Released);
                    self.listeners.detach_pointer();
                }
                Effect::None
            }
        }
    }

    /// Maps a raw Iced runtime event onto the binding events.
    ///
    /// Convenience for hosts that forward `iced::Event` wholesale instead of
    /// wiring per-widget callbacks. Presses are routed through the handle
    /// bounds reported by the layout provider.
    pub fn on_raw_event(&mut self, raw: &event::Event, layout: &dyn LayoutProvider) -> Effect {
        match raw {
            event::Event::Window(window::Event::Resized(size)) => {
                self.handle(Event::ViewportResized(*size), layout)
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(*position);
                self.handle(Event::PointerMoved(*position), layout)
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let over_handle = self.cursor_position.zip(layout.handle_bounds());
                if let Some((position, handle)) = over_handle {
                    if handle.contains(position) {
                        return self.handle(Event::HandlePressed(position), layout);
                    }
                }
                Effect::None
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.handle(Event::PointerReleased, layout)
            }
            _ => Effect::None,
        }
    }

    /// Detaches every listener and ends any in-flight gesture.
    ///
    /// Must be called when the consumer is discarded. Idempotent, so a
    /// second call cannot double-detach.
    pub fn teardown(&mut self) {
        if self.session.is_dragging() {
            debug!("teardown during an active gesture; ending the session");
            self.session.handle(session::Message::Released);
        }
        self.listeners.detach_all();
    }

    /// Refreshes the reference point and re-resolves the target.
    ///
    /// A missing reference element keeps the stale point; a selector that
    /// matches nothing leaves presses inert until the next trigger.
    fn recalculate(&mut self, layout: &dyn LayoutProvider) {
        match layout.reference_bounds() {
            Some(bounds) => self.reference_point = bounds.position(),
            None => trace!("reference element unmounted; keeping stale reference point"),
        }

        self.target_resolved = layout.target_bounds(&self.target_selector).is_some();
        if !self.target_resolved {
            debug!("target '{}' did not resolve", self.target_selector);
        }
    }

    /// Whether the press listener is currently attached.
    #[must_use]
    pub fn is_press_attached(&self) -> bool {
        self.listeners.press
    }

    /// Whether the surface-level move/release listeners are attached, i.e. a
    /// gesture is being tracked.
    #[must_use]
    pub fn is_tracking_pointer(&self) -> bool {
        self.listeners.pointer
    }

    /// Whether every listener, including resize, has been detached.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.listeners.is_empty()
    }

    /// The translation currently applied to the target.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.session.offset()
    }

    /// Reference point captured at the last recalculation.
    #[must_use]
    pub fn reference_point(&self) -> Point {
        self.reference_point
    }
}
