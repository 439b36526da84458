//! # CLI Layer
//!
//! One possible UI client for saitama. This is the only place that:
//! - parses arguments (`setup.rs`)
//! - talks to the terminal: confirmations, stdout, stderr (`commands.rs`)
//! - formats results for humans (`print.rs`)
//! - installs the log subscriber
//!
//! Handlers call the [`saitama::api::SaitamaApi`] and render the returned
//! `CmdResult`; they never touch the store directly.

mod commands;
mod print;
mod setup;

pub use commands::run;
