//! Convenient imports for typical grappelli usage.
//!
//! ```
//! use grappelli::prelude::*;
//! ```

pub use grappelli_locations::{Location, LocationComposer, PathLocationComposer};
pub use grappelli_routers::{
	AttachableRoutesBuilder, ConfigurationError, ResolvedRoute, RouteDefinition, RouteEntry,
	RouteParams, RouteRecord, RouteResolver, RouteTable, RoutesBuilder, WildcardRouteDefinition,
	WildcardRouteRecord,
};
