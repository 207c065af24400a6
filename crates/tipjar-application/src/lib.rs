//! Application layer for tipjar.
//!
//! This crate provides the use case that coordinates the domain and
//! infrastructure layers behind the calculator form.

pub mod bootstrap;
pub mod tip_session;

pub use bootstrap::open_session;
pub use tip_session::TipSession;
