//! stampnorm-core — parsing and normalisation of broadcast benchmark results.
//!
//! A result file carries a label, a `Before` timestamp taken by the root,
//! one timestamp per peer, and an `After` timestamp. This crate turns that
//! file into offsets relative to `Before`.
//!
//! # Pipeline
//!
//! ```text
//! read file ──► parse (Record) ──► normalize (Report) ──► render
//! ```
//!
//! Every stage is synchronous and every error is fatal to the run.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod report;
pub mod types;

pub use error::{ErrorKind, FormatError, NormalizeError};
pub use normalizer::normalize;
pub use types::{Measurement, Record, Report};
