// Attachment and table-sharing integration tests.

use std::sync::Arc;

use grappelli_locations::{Location, PathLocationComposer};
use grappelli_routers::{
	AttachableRoutesBuilder, ConfigurationError, RouteDefinition, RouteResolver, RoutesBuilder,
};

fn composer() -> Arc<PathLocationComposer> {
	Arc::new(PathLocationComposer::new())
}

// Test: attaching twice to one record fails, first attachment stays
#[test]
fn test_double_attach_through_table_fails() {
	let composer = composer();
	let routes = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("foo", RouteDefinition::new(|_| "foo!".to_string()))])
		.unwrap()
		.get_routes();

	let first = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("hoge", RouteDefinition::new(|_| "hoge".to_string()))])
		.unwrap();
	let second = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("fuga", RouteDefinition::new(|_| "fuga".to_string()))])
		.unwrap();

	let record = routes.get("foo").unwrap();
	assert!(record.attach(&first).is_ok());
	assert_eq!(
		record.attach(&second),
		Err(ConfigurationError::AlreadyAttached)
	);

	// The losing attach left no trace: resolution still descends into the
	// first child table.
	let resolver = RouteResolver::new(routes, composer);
	let resolved = resolver.resolve(&Location::new("/foo/hoge", ()));
	assert_eq!(resolved.len(), 1);
	assert_eq!(resolved[0].route.action(&resolved[0].params), "hoge");
	assert!(
		resolver
			.resolve(&Location::new("/foo/fuga", ()))
			.is_empty()
	);
}

// Test: an attachment is visible through every table view of the records
#[test]
fn test_attach_is_visible_across_table_views() {
	let composer = composer();
	let builder = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("foo", RouteDefinition::new(|_| "foo!".to_string()))])
		.unwrap();

	// Hand out two independent table views before attaching.
	let view_a = builder.get_routes();
	let view_b = builder.clone().get_routes();

	let child = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("hoge", RouteDefinition::new(|_| "hoge".to_string()))])
		.unwrap();
	view_a.get("foo").unwrap().attach(&child).unwrap();

	assert!(view_b.get("foo").unwrap().has_child());
	let resolver = RouteResolver::new(view_b, composer);
	let resolved = resolver.resolve(&Location::new("/foo/hoge", ()));
	assert_eq!(resolved.len(), 1);
	assert_eq!(resolved[0].route.action(&resolved[0].params), "hoge");
}

// Test: the record holds the child builder's own cached resolver
#[test]
fn test_attached_resolver_is_the_builders_resolver() {
	let composer = composer();
	let routes = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("foo", RouteDefinition::new(|_| "foo!".to_string()))])
		.unwrap()
		.get_routes();

	let child = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("hoge", RouteDefinition::new(|_| "hoge".to_string()))])
		.unwrap();
	let record = routes.get("foo").unwrap();
	record.attach(&child).unwrap();

	let attached = record.child_resolver().expect("attached");
	assert!(Arc::ptr_eq(&attached, &child.get_resolver()));
}

// Test: the capability trait exposes the raw builder uniformly
#[test]
fn test_get_raw_builder_escape_hatch() {
	let composer = composer();
	let builder = RoutesBuilder::init(Arc::clone(&composer))
		.routes([("foo", RouteDefinition::new(|_| "foo!".to_string()))])
		.unwrap();

	fn attachable_key_count<B>(builder: &B) -> usize
	where
		B: AttachableRoutesBuilder<String, PathLocationComposer>,
	{
		builder.get_raw_builder().get_routes().len()
	}

	assert_eq!(attachable_key_count(&builder), 1);
}
