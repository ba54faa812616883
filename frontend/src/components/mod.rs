//! UI Components for the landing page.
//!
//! Every component takes the active [`Theme`](crate::theme::Theme) and reads
//! its copy from [`SITE`](crate::content::SITE).
//!
//! # Layout Components
//! - [`Header`] - Brand, navigation and mobile menu
//! - [`Footer`] - Page footer
//!
//! # Sections
//! - [`Hero`] - Headline and calls to action
//! - [`Features`] - Why choose us
//! - [`Catalog`] - Fish and meat product grids
//! - [`Process`] - Smoking process steps
//! - [`Delivery`] - Delivery and payment terms
//! - [`ContactSection`] - Contact details and request form

mod header;
mod hero;
mod features;
mod catalog;
mod process;
mod delivery;
mod contact;
mod footer;

pub use header::*;
pub use hero::*;
pub use features::*;
pub use catalog::*;
pub use process::*;
pub use delivery::*;
pub use contact::*;
pub use footer::*;
