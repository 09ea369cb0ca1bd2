//! Application state and command dispatch
//!
//! User gestures are expressed as discrete [`Command`] values consumed by a
//! single update function, [`Session::apply`]. All mutable state (the list
//! plus the transient view state) lives in one explicit [`Session`] value,
//! so the update logic is testable without any rendering layer.

mod command;
mod session;

pub use command::{Command, Outcome};
pub use session::{Session, ViewState};
