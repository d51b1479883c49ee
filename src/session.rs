// SPDX-License-Identifier: MPL-2.0
//! Drag session controller sub-component.
//!
//! Owns the persistent offset baseline and the press/move/release state
//! machine. One gesture at a time: press freezes the movement envelope,
//! every move emits a clamped offset, release keeps the last offset as the
//! baseline for the next gesture.

use crate::geometry::MovementEnvelope;
use crate::state::SessionState;
use iced::{Point, Rectangle, Size, Vector};

/// Session controller state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying gesture state.
    pub inner: SessionState,

    /// Cumulative translation applied to the target. Survives across
    /// gestures as the baseline for the next press.
    offset: Vector,
}

/// Messages for the session controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// Press on the handle - carries the geometry captured at press time.
    Pressed {
        /// Pointer position at press.
        position: Point,
        /// Live bounds of the target element.
        target_bounds: Rectangle,
        /// Reference point captured at the last recalculation.
        reference: Point,
        /// Current viewport size.
        viewport: Size,
    },
    /// Pointer moved while a gesture is active.
    Moved(Point),
    /// Pointer released.
    Released,
}

/// Effects produced by session operations.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The offset changed; the host applies it as a 2D translation.
    OffsetChanged(Vector),
}

impl State {
    /// Handle a session message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed {
                position,
                target_bounds,
                reference,
                viewport,
            } => {
                // Envelope is computed once per gesture and stays frozen
                // even if the viewport resizes mid-drag.
                let envelope =
                    MovementEnvelope::compute(target_bounds, reference, self.offset, viewport);
                self.inner.start(position, self.offset, envelope);
                Effect::None
            }
            Message::Moved(position) => {
                if let Some(offset) = self.inner.clamped_offset(position) {
                    self.offset = offset;
                    Effect::OffsetChanged(offset)
                } else {
                    Effect::None
                }
            }
            Message::Released => {
                self.inner.stop();
                Effect::None
            }
        }
    }

    /// Check if a gesture is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging
    }

    /// The translation currently applied to the target.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn press_at(position: Point) -> Message {
        Message::Pressed {
            position,
            target_bounds: Rectangle::new(Point::new(100.0, 50.0), Size::new(200.0, 100.0)),
            reference: Point::new(0.0, 0.0),
            viewport: Size::new(1000.0, 600.0),
        }
    }

    #[test]
    fn press_starts_a_gesture() {
        let mut state = State::default();
        assert!(!state.is_dragging());

        state.handle(press_at(Point::new(150.0, 80.0)));
        assert!(state.is_dragging());
    }

    #[test]
    fn release_ends_the_gesture() {
        let mut state = State::default();
        state.handle(press_at(Point::new(150.0, 80.0)));
        state.handle(Message::Released);
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_then_release_without_movement_keeps_offset() {
        let mut state = State::default();
        state.handle(press_at(Point::new(150.0, 80.0)));
        state.handle(Message::Released);

        assert_abs_diff_eq!(state.offset().x, 0.0);
        assert_abs_diff_eq!(state.offset().y, 0.0);
    }

    #[test]
    fn move_emits_clamped_offset() {
        let mut state = State::default();
        state.handle(press_at(Point::new(150.0, 80.0)));

        // Within bounds
        match state.handle(Message::Moved(Point::new(50.0, 80.0))) {
            Effect::OffsetChanged(offset) => {
                assert_abs_diff_eq!(offset.x, -100.0);
                assert_abs_diff_eq!(offset.y, 0.0);
            }
            Effect::None => panic!("expected OffsetChanged"),
        }

        // Far past the left edge, clamped to the envelope minimum
        match state.handle(Message::Moved(Point::new(-500.0, 80.0))) {
            Effect::OffsetChanged(offset) => {
                assert_abs_diff_eq!(offset.x, -100.0);
                assert_abs_diff_eq!(offset.y, 0.0);
            }
            Effect::None => panic!("expected OffsetChanged"),
        }
    }

    #[test]
    fn move_while_idle_is_a_no_op() {
        let mut state = State::default();
        let effect = state.handle(Message::Moved(Point::new(10.0, 10.0)));
        assert!(matches!(effect, Effect::None));
        assert_abs_diff_eq!(state.offset().x, 0.0);
    }

    #[test]
    fn offset_becomes_baseline_for_next_gesture() {
        let mut state = State::default();

        state.handle(press_at(Point::new(150.0, 80.0)));
        state.handle(Message::Moved(Point::new(200.0, 110.0)));
        state.handle(Message::Released);
        assert_abs_diff_eq!(state.offset().x, 50.0);
        assert_abs_diff_eq!(state.offset().y, 30.0);

        // Next press: target bounds reflect the applied translation, and
        // the move deltas add on top of the kept baseline.
        state.handle(Message::Pressed {
            position: Point::new(300.0, 200.0),
            target_bounds: Rectangle::new(Point::new(150.0, 80.0), Size::new(200.0, 100.0)),
            reference: Point::new(0.0, 0.0),
            viewport: Size::new(1000.0, 600.0),
        });
        match state.handle(Message::Moved(Point::new(310.0, 190.0))) {
            Effect::OffsetChanged(offset) => {
                assert_abs_diff_eq!(offset.x, 60.0);
                assert_abs_diff_eq!(offset.y, 20.0);
            }
            Effect::None => panic!("expected OffsetChanged"),
        }
    }

    #[test]
    fn every_emitted_offset_stays_inside_the_envelope() {
        let mut state = State::default();
        state.handle(press_at(Point::new(150.0, 80.0)));

        let envelope = state.inner.envelope.expect("gesture is active");
        for step in 0..50 {
            let x = -700.0 + step as f32 * 60.0;
            let y = -400.0 + step as f32 * 30.0;
            if let Effect::OffsetChanged(offset) = state.handle(Message::Moved(Point::new(x, y))) {
                assert!(envelope.contains(offset));
            }
        }
    }
}
