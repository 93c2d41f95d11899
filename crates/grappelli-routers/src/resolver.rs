//! The recursive descent route resolver.

use crate::record::RouteParams;
use crate::table::{RouteEntry, RouteTable};
use grappelli_locations::{Location, LocationComposer};
use std::sync::Arc;

/// One successful match: the matched record, the parameters captured at the
/// matched level, and the remaining location.
///
/// The remaining location's caller state is preserved unchanged; its
/// positional key is advanced past all consumed segments. Parameters are
/// local to the matched level: a nested match carries the child's own
/// captures, never a merge with parent-level ones.
pub struct ResolvedRoute<A, C: LocationComposer, S> {
	/// The matched record.
	pub route: RouteEntry<A, C>,
	/// Parameters captured at the matched level (empty for static hits).
	pub params: RouteParams,
	/// The remaining location, state preserved.
	pub location: Location<S>,
}

impl<A, C: LocationComposer, S: Clone> Clone for ResolvedRoute<A, C, S> {
	fn clone(&self) -> Self {
		Self {
			route: self.route.clone(),
			params: self.params.clone(),
			location: self.location.clone(),
		}
	}
}

impl<A, C: LocationComposer, S: std::fmt::Debug> std::fmt::Debug for ResolvedRoute<A, C, S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolvedRoute")
			.field("route", &self.route)
			.field("params", &self.params)
			.field("location", &self.location)
			.finish()
	}
}

/// Resolves locations against a route table by recursive descent.
///
/// Matching is deterministic single-token lookup per tree level: the static
/// entries first, else the wildcard, with no backtracking across sibling
/// keys. Each recursive step consumes exactly one segment, so resolution
/// terminates after at most as many levels as the location has segments.
///
/// Resolution never runs route actions and never fails: a location that
/// corresponds to no route resolves to an empty sequence.
pub struct RouteResolver<A, C: LocationComposer> {
	routes: RouteTable<A, C>,
	composer: Arc<C>,
}

impl<A, C: LocationComposer> RouteResolver<A, C> {
	/// Creates a resolver over one table and its composer.
	pub fn new(routes: RouteTable<A, C>, composer: Arc<C>) -> Self {
		Self { routes, composer }
	}

	/// The table this resolver matches against.
	pub fn routes(&self) -> &RouteTable<A, C> {
		&self.routes
	}

	/// Resolves a location into zero or more matches, in candidate order.
	///
	/// Per decomposition candidate: a static hit captures nothing, a static
	/// miss falls back to the wildcard (capturing the segment), and a miss
	/// without wildcard contributes nothing. A match emits immediately when
	/// the remainder is a leaf or the record has no child tree — a non-leaf
	/// remainder against a childless record resolves at that level, with
	/// the remaining key returned unconsumed. Otherwise resolution descends
	/// into the attached child's resolver and splices its results.
	pub fn resolve<S: Clone>(&self, location: &Location<S>) -> Vec<ResolvedRoute<A, C, S>> {
		let mut resolved = Vec::new();
		for (segment, remainder) in self.composer.decompose(location) {
			let Some((route, params)) = self.routes.lookup(&segment) else {
				continue;
			};
			if self.composer.is_leaf(&remainder) {
				resolved.push(ResolvedRoute {
					route,
					params,
					location: remainder,
				});
				continue;
			}
			match route.child_resolver() {
				Some(child) => resolved.extend(child.resolve(&remainder)),
				None => resolved.push(ResolvedRoute {
					route,
					params,
					location: remainder,
				}),
			}
		}
		tracing::trace!(
			pathname = %location.pathname,
			matches = resolved.len(),
			"resolved location"
		);
		resolved
	}
}
