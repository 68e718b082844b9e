//! Command-line front end for the campus back office.
//!
//! The binary parses arguments, sets up logging and settings, then hands the
//! command to [`commands::run`] with a live HTTP client.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
