//! Reference host for the `datagrid` engine.
//!
//! Wires a video table to an in-memory catalog through REST-style query
//! parameters, and provides the command parser and text rendering used by
//! the `datagrid-demo` binary.

pub mod catalog;
pub mod error;
pub mod query;
pub mod session;
pub mod shell;
pub mod videos;
pub mod view;

pub use error::{HostError, ShellError};
pub use session::Session;
