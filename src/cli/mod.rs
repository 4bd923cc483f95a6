//! Command Line Interface (CLI) layer for openbook.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) that resolves the effective configuration, including
//! interactive overrides, and drives the roster batch. It wires
//! user-provided options to the underlying library functionality exposed
//! via `openbook::api`.
//!
//! If you are embedding openbook into another application, prefer using
//! the high-level `openbook::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
