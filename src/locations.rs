//! Location values and composers module.
//!
//! This module provides the [`Location`] value type and the
//! [`LocationComposer`] trait together with the path-based reference
//! implementation.
//!
//! # Examples
//!
//! ```
//! use grappelli::locations::{Location, LocationComposer, PathLocationComposer};
//!
//! let composer = PathLocationComposer::new();
//! let users = composer.compose(&composer.root(), "users");
//! assert_eq!(users.pathname, "/users");
//! ```

pub use grappelli_locations::*;
