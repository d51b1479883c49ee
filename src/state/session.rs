// SPDX-License-Identifier: MPL-2.0
//! Drag gesture state management
//!
//! Holds the ephemeral state of a single press-to-release gesture.

use crate::geometry::MovementEnvelope;
use iced::{Point, Vector};

/// Manages the state of one drag gesture
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Whether a gesture is currently active
    pub is_dragging: bool,

    /// Pointer position where the press happened
    pub press_position: Option<Point>,

    /// Offset that was applied to the target when the press happened
    pub base_offset: Option<Vector>,

    /// Envelope frozen at press time, valid for the whole gesture
    pub envelope: Option<MovementEnvelope>,
}

impl SessionState {
    /// Starts a drag gesture.
    pub fn start(&mut self, position: Point, offset: Vector, envelope: MovementEnvelope) {
        self.is_dragging = true;
        self.press_position = Some(position);
        self.base_offset = Some(offset);
        self.envelope = Some(envelope);
    }

    /// Ends the drag gesture.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.press_position = None;
        self.base_offset = None;
        self.envelope = None;
    }

    /// Calculates the clamped offset for the current pointer position.
    ///
    /// Returns `None` while no gesture is active.
    #[must_use]
    pub fn clamped_offset(&self, current: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let press = self.press_position?;
        let base = self.base_offset?;
        let envelope = self.envelope?;

        // Candidate: baseline plus how far the pointer moved since press
        let candidate = Vector::new(base.x + current.x - press.x, base.y + current.y - press.y);

        Some(envelope.clamp(candidate))
    }
}
