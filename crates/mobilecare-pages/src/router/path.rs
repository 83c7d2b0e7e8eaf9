//! Logical location values.

use std::fmt;
use std::sync::Arc;

/// An immutable logical location such as `/` or `/developer`.
///
/// Comparison is exact and case-sensitive. `/developer` and `/developer/`
/// are different paths, and query strings are part of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Arc<str>);

impl Path {
	/// Creates a path from any string.
	pub fn new(path: impl AsRef<str>) -> Self {
		Self(Arc::from(path.as_ref()))
	}

	/// The site root, `/`.
	pub fn root() -> Self {
		Self::new("/")
	}

	/// Returns the path as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true for `/`.
	pub fn is_root(&self) -> bool {
		self.as_str() == "/"
	}
}

impl Default for Path {
	fn default() -> Self {
		Self::root()
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Path {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Path {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for Path {
	fn from(value: String) -> Self {
		Self(Arc::from(value))
	}
}

impl From<&Path> for Path {
	fn from(value: &Path) -> Self {
		value.clone()
	}
}

impl PartialEq<str> for Path {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for Path {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}
