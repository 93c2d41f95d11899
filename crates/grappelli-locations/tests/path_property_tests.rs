//! Path composer property-based tests
//!
//! Property tests for composition/decomposition round-trips and state
//! preservation of the slash-delimited reference composer.

use grappelli_locations::{Location, LocationComposer, PathLocationComposer};
use proptest::prelude::*;
use rstest::*;

const SEGMENT: &str = "[a-z0-9][a-z0-9_-]{0,11}";

proptest! {
	/// Test: compose/decompose round-trip at the root
	///
	/// Category: Property
	/// Verifies that composing one segment onto the root and decomposing
	/// again yields the original (segment, root) pair.
	#[rstest]
	fn prop_compose_then_decompose_round_trips(segment in SEGMENT) {
		let composer = PathLocationComposer::new();
		let root = composer.root();

		let composed = composer.compose(&root, &segment);
		let decomposed = composer.decompose(&composed);

		prop_assert_eq!(decomposed, vec![(segment, root)]);
	}

	/// Test: decompose strips exactly one leading segment
	///
	/// Category: Property
	/// Verifies that for a two-segment path the remainder keeps the second
	/// segment behind a restored leading separator.
	#[rstest]
	fn prop_decompose_strips_first_segment(first in SEGMENT, second in SEGMENT) {
		let composer = PathLocationComposer::new();
		let root = composer.root();

		let composed = composer.compose(&composer.compose(&root, &first), &second);
		let decomposed = composer.decompose(&composed);

		prop_assert_eq!(decomposed.len(), 1);
		let (segment, remainder) = decomposed.into_iter().next().unwrap();
		prop_assert_eq!(segment, first);
		prop_assert_eq!(remainder.pathname, format!("/{}", second));
	}

	/// Test: caller state survives composition and decomposition
	///
	/// Category: Property
	/// Verifies that arbitrary caller state is carried through unchanged.
	#[rstest]
	fn prop_state_is_preserved(segment in SEGMENT, state in any::<i64>()) {
		let composer = PathLocationComposer::new();

		let base = Location::new("/", state);
		let composed = composer.compose(&base, &segment);
		prop_assert_eq!(composed.state, state);

		let decomposed = composer.decompose(&composed);
		prop_assert_eq!(decomposed[0].1.state, state);
	}

	/// Test: pathnames without the leading separator never decompose
	///
	/// Category: Property
	/// Verifies that relative-looking keys are treated as malformed and
	/// yield no candidates instead of an error.
	#[rstest]
	fn prop_malformed_pathname_yields_no_candidates(pathname in "[a-z][a-z0-9/]{0,20}") {
		let composer = PathLocationComposer::new();
		let decomposed = composer.decompose(&Location::new(pathname, ()));
		prop_assert!(decomposed.is_empty());
	}

	/// Test: composed locations are never leaves
	///
	/// Category: Property
	/// Verifies that extending the root by any segment leaves the leaf
	/// state behind, while the root itself stays a leaf.
	#[rstest]
	fn prop_composed_location_is_not_leaf(segment in SEGMENT) {
		let composer = PathLocationComposer::new();
		let root = composer.root();

		prop_assert!(composer.is_leaf(&root));
		prop_assert!(!composer.is_leaf(&composer.compose(&root, &segment)));
	}
}
