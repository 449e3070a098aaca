//! Audit events for registrar mutations.

pub mod event;

pub use event::Event;
