// SPDX-License-Identifier: MPL-2.0
//! Listener registration bookkeeping
//!
//! The engine never talks to a real event registry; the host forwards
//! events to it. This struct records which listeners are conceptually
//! registered so every attach stays pairable with a detach, and teardown
//! can prove nothing is left dangling.

/// Tracks which listeners are currently registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerSet {
    /// Press listener on the handle element
    pub press: bool,

    /// Surface-level move/release listeners, registered per gesture
    pub pointer: bool,

    /// Viewport resize listener
    pub resize: bool,
}

impl ListenerSet {
    /// Attaches the press listener. Attaching twice is a no-op.
    pub fn attach_press(&mut self) {
        self.press = true;
    }

    /// Detaches the press listener.
    pub fn detach_press(&mut self) {
        self.press = false;
    }

    /// Attaches the move/release listeners for an active gesture.
    pub fn attach_pointer(&mut self) {
        self.pointer = true;
    }

    /// Detaches the move/release listeners.
    pub fn detach_pointer(&mut self) {
        self.pointer = false;
    }

    /// Attaches the viewport resize listener.
    pub fn attach_resize(&mut self) {
        self.resize = true;
    }

    /// Detaches everything at once. Used by teardown.
    pub fn detach_all(&mut self) {
        *self = Self::default();
    }

    /// Checks that no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
