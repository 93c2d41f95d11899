//! The slash-delimited reference composer.

use crate::composer::LocationComposer;
use crate::location::Location;

/// Separator between path segments.
const SEPARATOR: char = '/';

/// Composer for slash-delimited path keys.
///
/// The root is `"/"`. A well-formed pathname starts with the separator;
/// anything else (e.g. a relative-looking `"foo/bar"`) is malformed and
/// decomposes to no candidates.
///
/// # Examples
///
/// ```
/// use grappelli_locations::{Location, LocationComposer, PathLocationComposer};
///
/// let composer = PathLocationComposer::new();
/// let deep = composer.compose(&Location::new("/foo", ()), "hoge");
/// assert_eq!(deep.pathname, "/foo/hoge");
///
/// let decomposed = composer.decompose(&deep);
/// assert_eq!(decomposed[0].0, "foo");
/// assert_eq!(decomposed[0].1.pathname, "/hoge");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathLocationComposer;

impl PathLocationComposer {
	/// Creates the path composer.
	pub fn new() -> Self {
		Self
	}
}

/// Appends one segment to a path without doubling the separator.
pub(crate) fn compose_path(base: &str, segment: &str) -> String {
	let segment = segment.trim_start_matches(SEPARATOR);
	if base.ends_with(SEPARATOR) {
		format!("{base}{segment}")
	} else {
		format!("{base}{SEPARATOR}{segment}")
	}
}

impl LocationComposer for PathLocationComposer {
	fn root(&self) -> Location<()> {
		Location::new("/", ())
	}

	fn compose<S: Clone>(&self, base: &Location<S>, segment: &str) -> Location<S> {
		Location {
			pathname: compose_path(&base.pathname, segment),
			state: base.state.clone(),
		}
	}

	fn decompose<S: Clone>(&self, location: &Location<S>) -> Vec<(String, Location<S>)> {
		let Some(rest) = location.pathname.strip_prefix(SEPARATOR) else {
			// Missing leading separator: malformed, no candidates.
			return Vec::new();
		};
		if rest.is_empty() {
			// The bare root marker: already exhausted.
			return Vec::new();
		}
		let (segment, remainder) = match rest.split_once(SEPARATOR) {
			Some((segment, tail)) => (segment, format!("{SEPARATOR}{tail}")),
			None => (rest, String::from("/")),
		};
		vec![(
			segment.to_string(),
			Location {
				pathname: remainder,
				state: location.state.clone(),
			},
		)]
	}

	fn is_leaf<S>(&self, location: &Location<S>) -> bool {
		location.pathname == "/"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", "foo", "/foo")]
	#[case("/foo", "hoge", "/foo/hoge")]
	#[case("/foo/", "hoge", "/foo/hoge")]
	#[case("/", "/foo", "/foo")]
	fn test_compose_path(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
		assert_eq!(compose_path(base, segment), expected);
	}

	#[rstest]
	#[case("/foo", Some(("foo", "/")))]
	#[case("/foo/hoge", Some(("foo", "/hoge")))]
	#[case("/foo/hoge/fuga", Some(("foo", "/hoge/fuga")))]
	#[case("/foo/", Some(("foo", "/")))]
	#[case("/", None)]
	#[case("foo/bar", None)]
	#[case("", None)]
	fn test_decompose(#[case] pathname: &str, #[case] expected: Option<(&str, &str)>) {
		let composer = PathLocationComposer::new();
		let decomposed = composer.decompose(&Location::new(pathname, ()));
		match expected {
			Some((segment, remainder)) => {
				assert_eq!(decomposed.len(), 1);
				assert_eq!(decomposed[0].0, segment);
				assert_eq!(decomposed[0].1, Location::new(remainder, ()));
			}
			None => assert!(decomposed.is_empty()),
		}
	}

	#[test]
	fn test_root_is_leaf() {
		let composer = PathLocationComposer::new();
		assert!(composer.is_leaf(&composer.root()));
		assert!(!composer.is_leaf(&Location::new("/foo", ())));
	}

	#[test]
	fn test_compose_preserves_state() {
		let composer = PathLocationComposer::new();
		let composed = composer.compose(&Location::new("/", 7u32), "foo");
		assert_eq!(composed, Location::new("/foo", 7u32));
	}

	#[test]
	fn test_decompose_preserves_state() {
		let composer = PathLocationComposer::new();
		let decomposed = composer.decompose(&Location::new("/foo/bar", "keep me"));
		assert_eq!(decomposed.len(), 1);
		assert_eq!(decomposed[0].1.state, "keep me");
	}
}
