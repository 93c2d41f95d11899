//! Configuration-time error types.
//!
//! These are programmer errors surfaced immediately during builder calls,
//! never deferred to resolution. Resolution itself has no error type: a
//! location that matches nothing resolves to an empty result sequence.

/// Error raised synchronously while assembling or wiring a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	/// A static route key was registered twice within one table.
	#[error("Duplicate route key: '{0}'")]
	DuplicateRoute(String),

	/// A second wildcard was registered for the same table level.
	#[error("Wildcard route is already registered")]
	DuplicateWildcard,

	/// `attach` was called a second time on one route record.
	#[error("Route record already has an attached child tree")]
	AlreadyAttached,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_configuration_error_display() {
		assert_eq!(
			ConfigurationError::DuplicateRoute("foo".to_string()).to_string(),
			"Duplicate route key: 'foo'"
		);
		assert_eq!(
			ConfigurationError::DuplicateWildcard.to_string(),
			"Wildcard route is already registered"
		);
		assert_eq!(
			ConfigurationError::AlreadyAttached.to_string(),
			"Route record already has an attached child tree"
		);
	}
}
