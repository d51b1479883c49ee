// SPDX-License-Identifier: MPL-2.0
//! Movement envelope geometry
//!
//! Pure arithmetic for keeping a dragged panel inside the viewport. No
//! state, no I/O.

use iced::{Point, Rectangle, Size, Vector};

/// Inclusive range of offsets that keeps the target's bounds inside the
/// viewport.
///
/// Computed once at press time and frozen for the whole session; a viewport
/// resize mid-drag is only picked up by the next session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementEnvelope {
    /// Smallest allowed horizontal offset
    pub min_x: f32,
    /// Largest allowed horizontal offset
    pub max_x: f32,
    /// Smallest allowed vertical offset
    pub min_y: f32,
    /// Largest allowed vertical offset
    pub max_y: f32,
}

impl MovementEnvelope {
    /// Computes the envelope from the target's current (already translated)
    /// bounds, the reference point, the offset currently applied, and the
    /// viewport size.
    ///
    /// Subtracting the reference point removes the coordinate frame baked
    /// into `target`; adding the applied offset back expresses the bounds in
    /// offset space, so any offset inside the envelope keeps the target
    /// within `[0, viewport.width] x [0, viewport.height]`.
    #[must_use]
    pub fn compute(target: Rectangle, reference: Point, offset: Vector, viewport: Size) -> Self {
        let target_left = target.x - reference.x;
        let target_top = target.y - reference.y;

        Self {
            min_x: -target_left + offset.x,
            max_x: viewport.width - target_left - target.width + offset.x,
            min_y: -target_top + offset.y,
            max_y: viewport.height - target_top - target.height + offset.y,
        }
    }

    /// Clamps a candidate offset to the envelope, each axis independently.
    ///
    /// When the target is larger than the viewport the range is inverted
    /// (`min > max`) and the result collapses to the min bound.
    #[must_use]
    pub fn clamp(&self, candidate: Vector) -> Vector {
        Vector::new(
            candidate.x.min(self.max_x).max(self.min_x),
            candidate.y.min(self.max_y).max(self.min_y),
        )
    }

    /// Checks whether an offset lies inside the envelope.
    #[must_use]
    pub fn contains(&self, offset: Vector) -> bool {
        offset.x >= self.min_x
            && offset.x <= self.max_x
            && offset.y >= self.min_y
            && offset.y <= self.max_y
    }
}
