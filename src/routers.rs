//! Route tables, builders and the resolver module.
//!
//! This module provides the route-side surface: definitions and records,
//! the accumulating [`RoutesBuilder`], the built [`RouteTable`] and the
//! recursive [`RouteResolver`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use grappelli::locations::PathLocationComposer;
//! use grappelli::routers::{RouteDefinition, RoutesBuilder};
//!
//! let composer = Arc::new(PathLocationComposer::new());
//! let builder = RoutesBuilder::init(composer)
//!     .routes([("health", RouteDefinition::new(|_| "ok"))])
//!     .unwrap();
//! assert_eq!(builder.get_routes().len(), 1);
//! ```

pub use grappelli_routers::*;
