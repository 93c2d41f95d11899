//! # Grappelli Routers
//!
//! Route tables and the recursive descent resolver:
//!
//! - **Route records**: immutable action holders, optionally carrying one
//!   attached child route tree ([`RouteRecord`], [`WildcardRouteRecord`])
//! - **Builder**: fluent accumulation of named static routes plus at most
//!   one wildcard fallback per level ([`RoutesBuilder`])
//! - **Resolution**: deterministic single-token lookup per level, static
//!   keys before the wildcard, no backtracking across siblings
//!   ([`RouteResolver`])
//!
//! Configuration mistakes (duplicate keys, duplicate wildcard, double
//! attach) fail fast with [`ConfigurationError`]. An unmatched location is
//! not an error: it resolves to an empty result sequence.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use grappelli_locations::{Location, PathLocationComposer};
//! use grappelli_routers::{RouteDefinition, RoutesBuilder};
//!
//! let composer = Arc::new(PathLocationComposer::new());
//! let builder = RoutesBuilder::init(Arc::clone(&composer))
//!     .routes([
//!         ("foo", RouteDefinition::new(|_| "foo!".to_string())),
//!         ("bar", RouteDefinition::new(|_| "bar".to_string())),
//!     ])
//!     .unwrap();
//!
//! let resolver = builder.get_resolver();
//! let resolved = resolver.resolve(&Location::new("/foo", ()));
//! assert_eq!(resolved.len(), 1);
//! assert_eq!(resolved[0].route.action(&resolved[0].params), "foo!");
//! ```
//!
//! ## Nesting
//!
//! A route record accepts one child route tree via [`RouteRecord::attach`];
//! resolution then descends level by level, consuming one segment per
//! level:
//!
//! ```
//! use std::sync::Arc;
//! use grappelli_locations::{Location, PathLocationComposer};
//! use grappelli_routers::{RouteDefinition, RouteResolver, RoutesBuilder};
//!
//! let composer = Arc::new(PathLocationComposer::new());
//! let routes = RoutesBuilder::init(Arc::clone(&composer))
//!     .routes([("foo", RouteDefinition::new(|_| "foo!".to_string()))])
//!     .unwrap()
//!     .get_routes();
//!
//! let child = RoutesBuilder::init(Arc::clone(&composer))
//!     .routes([("hoge", RouteDefinition::new(|_| "hoge".to_string()))])
//!     .unwrap();
//! routes.get("foo").unwrap().attach(&child).unwrap();
//!
//! let resolver = RouteResolver::new(routes, composer);
//! let resolved = resolver.resolve(&Location::new("/foo/hoge", ()));
//! assert_eq!(resolved[0].route.action(&resolved[0].params), "hoge");
//! assert_eq!(resolved[0].location.pathname, "/");
//! ```

pub mod builder;
pub mod error;
pub mod record;
pub mod resolver;
pub mod table;

pub use builder::{AttachableRoutesBuilder, RoutesBuilder};
pub use error::ConfigurationError;
pub use record::{
	Action, RouteDefinition, RouteParams, RouteRecord, WildcardRouteDefinition,
	WildcardRouteRecord,
};
pub use resolver::{ResolvedRoute, RouteResolver};
pub use table::{RouteEntry, RouteTable};
