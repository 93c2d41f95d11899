//! # Grappelli
//!
//! Location-to-route resolution for Rust, in the spirit of client-side
//! routers: a statically declared tree of named routes, an opaque location
//! (positional key plus caller state) resolved against it, and nothing else.
//!
//! Grappelli deliberately separates three concerns:
//!
//! - **Composing locations**: the [`locations::LocationComposer`] trait knows
//!   how to build, split and terminate a location's positional key. The
//!   bundled [`locations::PathLocationComposer`] handles slash-delimited
//!   paths.
//! - **Declaring routes**: [`routers::RoutesBuilder`] accumulates named
//!   static routes plus at most one wildcard fallback per level into an
//!   immutable route table; nesting is a one-time `attach` of a child
//!   builder under a parent record.
//! - **Resolving**: [`routers::RouteResolver`] recursively descends the
//!   route tree, one segment per level, and returns matches without running
//!   any route action. Action invocation stays with the caller.
//!
//! Resolution is synchronous, side-effect-free and never fails: a location
//! that corresponds to no route resolves to an empty result sequence.
//!
//! ## Quick Example
//!
//! ```
//! use std::sync::Arc;
//! use grappelli::prelude::*;
//!
//! let composer = Arc::new(PathLocationComposer::new());
//! let builder = RoutesBuilder::init(Arc::clone(&composer))
//!     .routes([
//!         ("users", RouteDefinition::new(|_| "user list".to_string())),
//!     ])
//!     .unwrap();
//!
//! let resolver = builder.get_resolver();
//! let resolved = resolver.resolve(&Location::new("/users", ()));
//! assert_eq!(resolved.len(), 1);
//! assert_eq!(resolved[0].route.action(&resolved[0].params), "user list");
//! ```

pub mod locations;
pub mod prelude;
pub mod routers;
