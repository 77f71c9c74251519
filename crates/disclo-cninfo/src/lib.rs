//! # Disclo cninfo
//!
//! Disclosure source backed by the cninfo announcement search.
//!
//! Looks up a stock's `orgId`, pages through the announcement query and maps
//! each hit onto a detail-page link the download resolver understands.

pub mod client;
pub mod wire;

pub use client::CninfoClient;
