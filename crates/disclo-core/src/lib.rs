//! Disclo Core Library
//!
//! Domain models and business logic for disclosure announcement lookup:
//! shared-secret access control, announcement fetching and download-link
//! resolution.

pub mod announcement;
pub mod auth;
pub mod config;
pub mod error;
pub mod resolver;

pub use error::{DiscloError, DiscloResult};
