//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — scan/decode/check/validate handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate decoding and batch logic to `ocr` and `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
