//! WebAssembly bindings for the interpreter.
//!
//! This module provides JavaScript-callable access to a [`Machine`](crate::Machine),
//! so a browser front end can load bytes, drive fetch/execute and inspect state.

pub mod api;

pub use api::WasmMachine;
