//! The composer abstraction over positional keys.

use crate::location::Location;

/// Strategy for building and splitting [`Location`] positional keys.
///
/// A composer fixes the concrete shape of the key (delimiters, root marker)
/// so that resolution logic never has to. Implementations must be pure:
/// every method returns new values and leaves its inputs untouched.
pub trait LocationComposer: Send + Sync {
	/// The canonical root location, with no accumulated state.
	fn root(&self) -> Location<()>;

	/// Returns `base` extended by one more segment, state preserved.
	fn compose<S: Clone>(&self, base: &Location<S>, segment: &str) -> Location<S>;

	/// Splits off the first unconsumed segment, yielding `(segment,
	/// remainder)` candidates.
	///
	/// A well-formed location yields exactly one candidate whose remainder
	/// has that segment removed. A malformed location (one whose positional
	/// key does not match this composer's expected shape) or an exhausted
	/// one yields no candidates, so it fails resolution with no match
	/// rather than with an error. The sequence return type leaves room for
	/// composers with multiple competing decompositions; the reference
	/// composer is deterministic and yields 0 or 1.
	fn decompose<S: Clone>(&self, location: &Location<S>) -> Vec<(String, Location<S>)>;

	/// True when no further segments remain and the location denotes "here".
	fn is_leaf<S>(&self, location: &Location<S>) -> bool;
}
