//! Route records: immutable action holders with a one-shot child slot.

use crate::builder::AttachableRoutesBuilder;
use crate::error::ConfigurationError;
use crate::resolver::RouteResolver;
use grappelli_locations::LocationComposer;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Parameters captured on the way to a matched route.
///
/// Empty for purely static matches; a wildcard match carries exactly one
/// entry, the consumed segment under the wildcard's match key.
pub type RouteParams = HashMap<String, String>;

/// A route action.
///
/// Actions are invoked by the caller with the captured parameters, never by
/// the resolver; this keeps resolution side-effect-free and lets callers
/// defer, filter, or single out one match before executing anything.
pub type Action<A> = Arc<dyn Fn(&RouteParams) -> A + Send + Sync>;

/// Caller-supplied definition of a static route.
///
/// # Examples
///
/// ```
/// use grappelli_routers::RouteDefinition;
///
/// let definition = RouteDefinition::new(|_| "user list".to_string());
/// ```
pub struct RouteDefinition<A> {
	pub(crate) action: Action<A>,
}

impl<A> RouteDefinition<A> {
	/// Creates a definition from its action.
	pub fn new<F>(action: F) -> Self
	where
		F: Fn(&RouteParams) -> A + Send + Sync + 'static,
	{
		Self {
			action: Arc::new(action),
		}
	}
}

impl<A> Clone for RouteDefinition<A> {
	fn clone(&self) -> Self {
		Self {
			action: Arc::clone(&self.action),
		}
	}
}

/// Caller-supplied definition of the wildcard fallback for one table level.
///
/// The action receives the consumed segment under the capture key chosen at
/// registration time.
///
/// # Examples
///
/// ```
/// use grappelli_routers::WildcardRouteDefinition;
///
/// let definition = WildcardRouteDefinition::new(|params| format!("id is {}", params["id"]));
/// ```
pub struct WildcardRouteDefinition<A> {
	pub(crate) action: Action<A>,
}

impl<A> WildcardRouteDefinition<A> {
	/// Creates a definition from its action.
	pub fn new<F>(action: F) -> Self
	where
		F: Fn(&RouteParams) -> A + Send + Sync + 'static,
	{
		Self {
			action: Arc::new(action),
		}
	}
}

impl<A> Clone for WildcardRouteDefinition<A> {
	fn clone(&self) -> Self {
		Self {
			action: Arc::clone(&self.action),
		}
	}
}

/// The built, immutable form of a static route definition.
///
/// The only permitted transition after construction is one [`attach`]
/// binding a child route tree for nested resolution; a second `attach`
/// fails with [`ConfigurationError::AlreadyAttached`]. Attachment is a
/// configuration-phase operation and must complete before any resolver
/// observes the record.
///
/// [`attach`]: RouteRecord::attach
pub struct RouteRecord<A, C: LocationComposer> {
	action: Action<A>,
	child: OnceCell<Arc<RouteResolver<A, C>>>,
}

impl<A, C: LocationComposer> RouteRecord<A, C> {
	pub(crate) fn from_definition(definition: RouteDefinition<A>) -> Self {
		Self {
			action: definition.action,
			child: OnceCell::new(),
		}
	}

	/// Runs this record's action with the given captured parameters.
	pub fn action(&self, params: &RouteParams) -> A {
		(self.action)(params)
	}

	/// Attaches a child route tree, at most once.
	///
	/// The record captures the resolver bound to the builder's table;
	/// resolution will descend into it for non-leaf remainders.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::AlreadyAttached`] if a child tree was
	/// already attached to this record.
	pub fn attach<B>(&self, builder: &B) -> Result<(), ConfigurationError>
	where
		B: AttachableRoutesBuilder<A, C>,
	{
		self.child
			.set(builder.get_resolver())
			.map_err(|_| ConfigurationError::AlreadyAttached)?;
		tracing::debug!("attached child route tree");
		Ok(())
	}

	/// The resolver bound to the attached child tree, if any.
	pub fn child_resolver(&self) -> Option<Arc<RouteResolver<A, C>>> {
		self.child.get().cloned()
	}

	/// Whether a child tree has been attached.
	pub fn has_child(&self) -> bool {
		self.child.get().is_some()
	}
}

impl<A, C: LocationComposer> std::fmt::Debug for RouteRecord<A, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteRecord")
			.field("has_child", &self.has_child())
			.finish()
	}
}

/// A route record matching any single unmatched segment.
///
/// Differs from [`RouteRecord`] only in matching policy: it always exists
/// for lookup purposes, is strictly lower priority than any static key at
/// the same level, and captures the consumed segment under its match key.
pub struct WildcardRouteRecord<A, C: LocationComposer> {
	match_key: String,
	record: RouteRecord<A, C>,
}

impl<A, C: LocationComposer> WildcardRouteRecord<A, C> {
	pub(crate) fn from_definition(
		match_key: String,
		definition: WildcardRouteDefinition<A>,
	) -> Self {
		Self {
			match_key,
			record: RouteRecord {
				action: definition.action,
				child: OnceCell::new(),
			},
		}
	}

	/// The key the consumed segment is captured under.
	pub fn match_key(&self) -> &str {
		&self.match_key
	}

	/// Runs this record's action with the given captured parameters.
	pub fn action(&self, params: &RouteParams) -> A {
		self.record.action(params)
	}

	/// Attaches a child route tree, at most once.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::AlreadyAttached`] if a child tree was
	/// already attached to this record.
	pub fn attach<B>(&self, builder: &B) -> Result<(), ConfigurationError>
	where
		B: AttachableRoutesBuilder<A, C>,
	{
		self.record.attach(builder)
	}

	/// The resolver bound to the attached child tree, if any.
	pub fn child_resolver(&self) -> Option<Arc<RouteResolver<A, C>>> {
		self.record.child_resolver()
	}

	/// Whether a child tree has been attached.
	pub fn has_child(&self) -> bool {
		self.record.has_child()
	}

	/// The underlying record.
	pub fn record(&self) -> &RouteRecord<A, C> {
		&self.record
	}
}

impl<A, C: LocationComposer> std::fmt::Debug for WildcardRouteRecord<A, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WildcardRouteRecord")
			.field("match_key", &self.match_key)
			.field("has_child", &self.has_child())
			.finish()
	}
}
