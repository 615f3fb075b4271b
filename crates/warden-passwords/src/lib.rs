//! # warden-passwords
//!
//! Password services for Warden:
//! - [`PasswordService`] — the capability of setting a user's password
//! - [`AuthorizedPasswordService`] — a drop-in wrapper that only delegates
//!   when the caller may write the target user

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod authorized;
mod service;

pub use authorized::AuthorizedPasswordService;
pub use service::PasswordService;
