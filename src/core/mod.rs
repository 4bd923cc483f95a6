//! Core building blocks: the immutable run configuration and its
//! defaults/flags/overrides resolution. These are consumed by the high-level
//! `api` module and the CLI.
pub mod config;
