//! # Grappelli Locations
//!
//! Location values and the composers that build and split them.
//!
//! A [`Location`] is an opaque positional key (for the reference
//! implementation, a slash-delimited path) paired with arbitrary caller
//! state. A [`LocationComposer`] abstracts the concrete shape of the
//! positional key, so route resolution stays representation-agnostic:
//! it only ever asks a composer to split off the next segment
//! ([`LocationComposer::decompose`]) or to check for termination
//! ([`LocationComposer::is_leaf`]).
//!
//! # Examples
//!
//! ```
//! use grappelli_locations::{Location, LocationComposer, PathLocationComposer};
//!
//! let composer = PathLocationComposer::new();
//!
//! let users = composer.compose(&composer.root(), "users");
//! assert_eq!(users.pathname, "/users");
//!
//! let decomposed = composer.decompose(&users);
//! assert_eq!(decomposed, vec![("users".to_string(), composer.root())]);
//! ```

pub mod composer;
pub mod location;
pub mod path;

pub use composer::LocationComposer;
pub use location::Location;
pub use path::PathLocationComposer;
