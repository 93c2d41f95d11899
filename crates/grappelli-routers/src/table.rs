//! Route tables and per-segment lookup.

use crate::record::{RouteParams, RouteRecord, WildcardRouteRecord};
use crate::resolver::RouteResolver;
use grappelli_locations::LocationComposer;
use std::collections::HashMap;
use std::sync::Arc;

/// The static-key-to-record mapping plus optional wildcard slot produced by
/// one builder.
///
/// Tables are read-only for resolution purposes. `attach` on a contained
/// record is the only later mutation and belongs to the configuration
/// phase; once configuration is complete a table may be freely shared and
/// read concurrently. Records are shared by `Arc`, so every view of the
/// same builder's records observes the same attachments.
pub struct RouteTable<A, C: LocationComposer> {
	records: HashMap<String, Arc<RouteRecord<A, C>>>,
	wildcard: Option<Arc<WildcardRouteRecord<A, C>>>,
}

impl<A, C: LocationComposer> RouteTable<A, C> {
	pub(crate) fn new(
		records: HashMap<String, Arc<RouteRecord<A, C>>>,
		wildcard: Option<Arc<WildcardRouteRecord<A, C>>>,
	) -> Self {
		Self { records, wildcard }
	}

	/// The record registered under a static key, if any.
	pub fn get(&self, key: &str) -> Option<&Arc<RouteRecord<A, C>>> {
		self.records.get(key)
	}

	/// The wildcard record for this level, if one was registered.
	pub fn wildcard(&self) -> Option<&Arc<WildcardRouteRecord<A, C>>> {
		self.wildcard.as_ref()
	}

	/// Number of static routes in the table.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// True when the table holds no static routes.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// The static route keys, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.records.keys().map(String::as_str)
	}

	/// Looks up one segment: static entries first, else the wildcard slot.
	///
	/// A static hit captures no parameters. A wildcard hit captures the
	/// segment under the wildcard's match key. Returns `None` when the
	/// segment matches neither.
	pub fn lookup(&self, segment: &str) -> Option<(RouteEntry<A, C>, RouteParams)> {
		if let Some(record) = self.records.get(segment) {
			return Some((RouteEntry::Static(Arc::clone(record)), RouteParams::new()));
		}
		let wildcard = self.wildcard.as_ref()?;
		let mut params = RouteParams::new();
		params.insert(wildcard.match_key().to_string(), segment.to_string());
		Some((RouteEntry::Wildcard(Arc::clone(wildcard)), params))
	}
}

impl<A, C: LocationComposer> Clone for RouteTable<A, C> {
	fn clone(&self) -> Self {
		Self {
			records: self.records.clone(),
			wildcard: self.wildcard.clone(),
		}
	}
}

impl<A, C: LocationComposer> std::fmt::Debug for RouteTable<A, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteTable")
			.field("keys", &self.records.keys().collect::<Vec<_>>())
			.field("has_wildcard", &self.wildcard.is_some())
			.finish()
	}
}

/// A matched table entry: a static record or the wildcard fallback.
///
/// Carried in resolution results so callers can run the matched action or
/// inspect which kind of entry claimed the segment.
pub enum RouteEntry<A, C: LocationComposer> {
	/// A static key matched the segment exactly.
	Static(Arc<RouteRecord<A, C>>),
	/// No static key matched; the wildcard claimed the segment.
	Wildcard(Arc<WildcardRouteRecord<A, C>>),
}

impl<A, C: LocationComposer> RouteEntry<A, C> {
	/// Runs the matched record's action with the given captured parameters.
	pub fn action(&self, params: &RouteParams) -> A {
		match self {
			Self::Static(record) => record.action(params),
			Self::Wildcard(record) => record.action(params),
		}
	}

	/// The resolver bound to the matched record's child tree, if any.
	pub fn child_resolver(&self) -> Option<Arc<RouteResolver<A, C>>> {
		match self {
			Self::Static(record) => record.child_resolver(),
			Self::Wildcard(record) => record.child_resolver(),
		}
	}

	/// Whether the matched record carries a child tree.
	pub fn has_child(&self) -> bool {
		match self {
			Self::Static(record) => record.has_child(),
			Self::Wildcard(record) => record.has_child(),
		}
	}

	/// True when the wildcard claimed the segment.
	pub fn is_wildcard(&self) -> bool {
		matches!(self, Self::Wildcard(_))
	}

	/// The static record, when the entry is a static hit.
	pub fn as_static(&self) -> Option<&Arc<RouteRecord<A, C>>> {
		match self {
			Self::Static(record) => Some(record),
			Self::Wildcard(_) => None,
		}
	}

	/// The wildcard record, when the entry is a wildcard hit.
	pub fn as_wildcard(&self) -> Option<&Arc<WildcardRouteRecord<A, C>>> {
		match self {
			Self::Static(_) => None,
			Self::Wildcard(record) => Some(record),
		}
	}
}

impl<A, C: LocationComposer> Clone for RouteEntry<A, C> {
	fn clone(&self) -> Self {
		match self {
			Self::Static(record) => Self::Static(Arc::clone(record)),
			Self::Wildcard(record) => Self::Wildcard(Arc::clone(record)),
		}
	}
}

impl<A, C: LocationComposer> std::fmt::Debug for RouteEntry<A, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Static(record) => f.debug_tuple("Static").field(record).finish(),
			Self::Wildcard(record) => f.debug_tuple("Wildcard").field(record).finish(),
		}
	}
}
