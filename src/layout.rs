// SPDX-License-Identifier: MPL-2.0
//! Layout resolution seam between the engine and the host.

use iced::{Rectangle, Size};

/// Resolves element geometry for the binding layer.
///
/// The engine never owns a widget tree. The host implements this trait over
/// whatever layout data it has (widget bounds, overlay positions) and the
/// binding layer queries it when it needs fresh geometry: at every
/// recalculation trigger and at press time.
pub trait LayoutProvider {
    /// Current bounds of the element matching `selector`, if it is mounted.
    ///
    /// The returned bounds include any translation already applied to the
    /// element.
    fn target_bounds(&self, selector: &str) -> Option<Rectangle>;

    /// Current bounds of the reference element that establishes the
    /// coordinate frame, if it is mounted.
    fn reference_bounds(&self) -> Option<Rectangle>;

    /// Current bounds of the drag handle, if it is mounted. Used by the raw
    /// event mapping to decide whether a button press lands on the handle.
    fn handle_bounds(&self) -> Option<Rectangle>;

    /// Current viewport size.
    fn viewport_size(&self) -> Size;
}
