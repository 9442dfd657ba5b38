//! # Nestout - Outline Reports From the Command Line
//!
//! The `nestout` binary renders a JSON or YAML document as an indented
//! outline using [`nestout_render`]. The [`cli`] module holds the argument
//! definitions and the `run` entry point so they can be driven from tests.
//!
//! ```text
//! $ echo '{"minion1": {"reason": "timeout"}}' | nestout --color never
//! minion1:
//!     reason:
//!         timeout
//! ```

pub mod cli;
