//! The location value type.

use serde::{Deserialize, Serialize};

/// A resolvable position: an opaque positional key paired with caller state.
///
/// The positional key is a segment sequence rendered by a composer (for the
/// path composer, a string like `"/users/42"`). The state `S` is owned by
/// the caller and threaded through resolution unchanged; the resolver never
/// inspects it.
///
/// A `Location` is an immutable value. Composing or decomposing produces a
/// new `Location`, never a mutation of an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location<S = ()> {
	/// The positional key, e.g. a slash-delimited path.
	pub pathname: String,
	/// Caller-owned state, preserved unchanged through resolution.
	pub state: S,
}

impl<S> Location<S> {
	/// Creates a location from a positional key and caller state.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_locations::Location;
	///
	/// let location = Location::new("/users/42", ());
	/// assert_eq!(location.pathname, "/users/42");
	/// ```
	pub fn new(pathname: impl Into<String>, state: S) -> Self {
		Self {
			pathname: pathname.into(),
			state,
		}
	}

	/// Derives a location carrying different caller state, leaving the
	/// positional key untouched.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_locations::Location;
	///
	/// let location = Location::new("/users", 7u32).map_state(|n| n.to_string());
	/// assert_eq!(location.state, "7");
	/// ```
	pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> Location<T> {
		Location {
			pathname: self.pathname,
			state: f(self.state),
		}
	}
}
