//! Tracing setup for the console.
//!
//! The store and event handler are instrumented with `tracing` spans and
//! events; this module wires them to a subscriber. Observability is
//! optional: if no subscriber is installed the instrumentation is inert.

pub mod init;

pub use init::init_tracing;
