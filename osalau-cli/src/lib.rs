//! osalau CLI library
//!
//! This library provides the command-line interface around the osalau
//! line relay and the Osalausestaja clause segmenter.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;

pub use error::{CliError, CliResult};
