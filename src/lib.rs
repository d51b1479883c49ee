// SPDX-License-Identifier: MPL-2.0
//! `iced_drag_panel` is a viewport-clamped drag interaction engine for
//! floating panels (dialogs, toolbars) in Iced applications.
//!
//! The engine owns the press/move/release state machine and the offset
//! clamping; the host owns the widget tree, forwards input events, and
//! applies the emitted translation to the panel it renders.

#![doc(html_root_url = "https://docs.rs/iced_drag_panel/0.1.0")]

pub mod binding;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export the host-facing surface for convenience
pub use binding::{DragBinding, Effect, Event};
pub use geometry::MovementEnvelope;
pub use layout::LayoutProvider;
