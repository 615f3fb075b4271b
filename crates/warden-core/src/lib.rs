//! Warden Core — shared identifiers, errors, and result types.
//!
//! This crate has no internal Warden dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types, [`ErrorCode`] classification, and Result alias
//! - [`id`]: The 64-bit platform identifier

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

// Re-export key types at crate root for convenience
pub use error::{Error, ErrorCode, Result};
pub use id::Id;
