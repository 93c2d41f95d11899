//! The fluent builder assembling route tables.

use crate::error::ConfigurationError;
use crate::record::{
	RouteDefinition, RouteRecord, WildcardRouteDefinition, WildcardRouteRecord,
};
use crate::resolver::RouteResolver;
use crate::table::RouteTable;
use grappelli_locations::LocationComposer;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Capability contract for builders whose tables can be attached under a
/// parent route record.
///
/// [`RoutesBuilder`] implements it directly; a wrapper builder returns its
/// inner builder from [`get_raw_builder`] so attachment works uniformly for
/// directly-built and wrapped builders.
///
/// [`get_raw_builder`]: AttachableRoutesBuilder::get_raw_builder
pub trait AttachableRoutesBuilder<A, C: LocationComposer> {
	/// The underlying builder.
	fn get_raw_builder(&self) -> &RoutesBuilder<A, C>;

	/// A resolver bound to the builder's table.
	fn get_resolver(&self) -> Arc<RouteResolver<A, C>>;
}

/// Accumulates named static route definitions and at most one wildcard
/// fallback into a [`RouteTable`].
///
/// A builder is bound to one [`LocationComposer`] for its entire subtree.
/// Registration is fail-fast: a duplicate static key or a second wildcard
/// is a [`ConfigurationError`], not an overwrite.
///
/// Cloning a builder is cheap and shares the accumulated records, so a
/// table handed out by one builder observes attachments made through a
/// table handed out by a clone. The clone starts with a fresh resolver
/// cache.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grappelli_locations::{Location, PathLocationComposer};
/// use grappelli_routers::{RouteDefinition, RoutesBuilder, WildcardRouteDefinition};
///
/// let composer = Arc::new(PathLocationComposer::new());
/// let builder = RoutesBuilder::init(Arc::clone(&composer))
///     .routes([
///         ("users", RouteDefinition::new(|_| "user list".to_string())),
///     ])
///     .unwrap()
///     .wildcard(
///         "id",
///         WildcardRouteDefinition::new(|params| format!("id is {}", params["id"])),
///     )
///     .unwrap();
///
/// let resolver = builder.get_resolver();
/// let resolved = resolver.resolve(&Location::new("/42", ()));
/// assert_eq!(resolved[0].route.action(&resolved[0].params), "id is 42");
/// ```
pub struct RoutesBuilder<A, C: LocationComposer> {
	composer: Arc<C>,
	records: HashMap<String, Arc<RouteRecord<A, C>>>,
	wildcard: Option<Arc<WildcardRouteRecord<A, C>>>,
	resolver: OnceCell<Arc<RouteResolver<A, C>>>,
}

impl<A, C: LocationComposer> RoutesBuilder<A, C> {
	/// Starts a builder bound to one composer.
	///
	/// The composer choice is fixed for the builder's entire subtree; child
	/// builders attached below this one must reuse the same composer for
	/// consistent decomposition semantics.
	pub fn init(composer: Arc<C>) -> Self {
		Self {
			composer,
			records: HashMap::new(),
			wildcard: None,
			resolver: OnceCell::new(),
		}
	}

	/// Merges the given static definitions into the accumulating table.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::DuplicateRoute`] if any key already
	/// exists in the table. Duplicates across repeated `routes` calls are
	/// rejected, not overwritten.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use grappelli_locations::PathLocationComposer;
	/// use grappelli_routers::{RouteDefinition, RoutesBuilder};
	///
	/// let composer = Arc::new(PathLocationComposer::new());
	/// let builder = RoutesBuilder::init(composer)
	///     .routes([
	///         ("foo", RouteDefinition::new(|_| "foo!")),
	///         ("bar", RouteDefinition::new(|_| "bar")),
	///     ])
	///     .unwrap();
	/// assert_eq!(builder.get_routes().len(), 2);
	/// ```
	pub fn routes<K, I>(mut self, definitions: I) -> Result<Self, ConfigurationError>
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, RouteDefinition<A>)>,
	{
		for (key, definition) in definitions {
			let key = key.into();
			if self.records.contains_key(&key) {
				return Err(ConfigurationError::DuplicateRoute(key));
			}
			self.records
				.insert(key, Arc::new(RouteRecord::from_definition(definition)));
		}
		self.resolver = OnceCell::new();
		Ok(self)
	}

	/// Registers the single wildcard fallback for this level, capturing the
	/// consumed segment under `key`.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::DuplicateWildcard`] if a wildcard is
	/// already registered for this builder.
	pub fn wildcard<K>(
		mut self,
		key: K,
		definition: WildcardRouteDefinition<A>,
	) -> Result<Self, ConfigurationError>
	where
		K: Into<String>,
	{
		if self.wildcard.is_some() {
			return Err(ConfigurationError::DuplicateWildcard);
		}
		self.wildcard = Some(Arc::new(WildcardRouteRecord::from_definition(
			key.into(),
			definition,
		)));
		self.resolver = OnceCell::new();
		Ok(self)
	}

	/// The accumulated table: static records plus the optional wildcard.
	///
	/// Records are shared by `Arc`, so attaching a child tree through one
	/// handed-out table is visible through every other table produced from
	/// the same records.
	pub fn get_routes(&self) -> RouteTable<A, C> {
		RouteTable::new(self.records.clone(), self.wildcard.clone())
	}

	/// A resolver over this builder's table and composer.
	///
	/// Lazily constructed and cached: repeated calls return the same
	/// resolver. Registering further routes resets the cache, so a resolver
	/// never observes a table older than the builder that produced it.
	pub fn get_resolver(&self) -> Arc<RouteResolver<A, C>> {
		Arc::clone(self.resolver.get_or_init(|| {
			Arc::new(RouteResolver::new(
				self.get_routes(),
				Arc::clone(&self.composer),
			))
		}))
	}

	/// The composer this builder and its subtree are bound to.
	pub fn composer(&self) -> &Arc<C> {
		&self.composer
	}
}

impl<A, C: LocationComposer> AttachableRoutesBuilder<A, C> for RoutesBuilder<A, C> {
	fn get_raw_builder(&self) -> &RoutesBuilder<A, C> {
		self
	}

	fn get_resolver(&self) -> Arc<RouteResolver<A, C>> {
		RoutesBuilder::get_resolver(self)
	}
}

impl<A, C: LocationComposer> Clone for RoutesBuilder<A, C> {
	fn clone(&self) -> Self {
		Self {
			composer: Arc::clone(&self.composer),
			records: self.records.clone(),
			wildcard: self.wildcard.clone(),
			resolver: OnceCell::new(),
		}
	}
}

impl<A, C: LocationComposer> std::fmt::Debug for RoutesBuilder<A, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RoutesBuilder")
			.field("keys", &self.records.keys().collect::<Vec<_>>())
			.field("has_wildcard", &self.wildcard.is_some())
			.finish()
	}
}
