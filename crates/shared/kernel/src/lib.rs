//! Kernel logic shared by the site components.
//!
//! Every component of the page keeps its decisions here, free of any DOM
//! types, so the browser glue in `wayfarer-web` only reads inputs from the
//! page and writes the answers back.
//!
//! ```rust
//! use wayfarer_kernel::scroll::HeaderElevation;
//!
//! assert_eq!(HeaderElevation::at(51.0, 50.0), HeaderElevation::Raised);
//! assert_eq!(HeaderElevation::at(50.0, 50.0), HeaderElevation::Resting);
//! ```

pub mod anchor;
pub mod config;
pub mod feedback;
pub mod lazy;
pub mod menu;
pub mod navigation;
pub mod notification;
pub mod prelude;
pub mod rate_limit;
pub mod scroll;
pub mod validation;
pub mod viewport;

pub use wayfarer_domain as domain;
