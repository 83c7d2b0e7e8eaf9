//! Error types for client-side routing.

/// Error type for router operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// Two routes in one table share a path.
	#[error("Duplicate route path: {0}")]
	DuplicateRoute(String),
	/// Two routes in one table share a name.
	#[error("Duplicate route name: {0}")]
	DuplicateRouteName(String),
	/// No route carries the requested name.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// The host refused a history operation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
}
