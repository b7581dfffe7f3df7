//! Warehouse Chat is a terminal client for a warehouse question-answering
//! service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the question/answer lifecycle, the draft editor, the
//!   outbound query calls and configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//! - [`api`] defines the wire payloads and response normalization.
//! - [`cli`] parses arguments and dispatches to the chat screen, one-shot
//!   questions and config edits.
//!
//! The binary (`src/main.rs`) routes straight through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
