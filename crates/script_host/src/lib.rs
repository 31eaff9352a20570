//! # script_host
//!
//! An in-memory implementation of the engine boundary. It stores component
//! state exactly as written (a faithful store), journals every boundary
//! crossing, and owns entity allocation the way a real engine would.
//!
//! Useful both as the development host for driving the bindings without a
//! native engine and as the injected test double in unit tests.

pub mod engine;

pub use engine::{CallOp, CallRecord, HostEngine};
