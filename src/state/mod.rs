// SPDX-License-Identifier: MPL-2.0
//! Engine state modules
//!
//! Plain state structs used by the session controller and the binding
//! layer, separated from the message-handling logic.

pub mod listeners;
pub mod session;

// Re-export commonly used types for convenience
pub use listeners::ListenerSet;
pub use session::SessionState;
