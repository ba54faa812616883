//! Browser-facing services.
//!
//! # Services
//!
//! - [`submission`] - contact form status machine and the relay seam
//! - [`relay`] - Web3Forms HTTP client
//! - [`navigation`] - smooth scrolling between page sections

pub mod submission;
pub mod relay;
pub mod navigation;

pub use submission::*;
pub use relay::*;
pub use navigation::*;
