//! Error type returned by every GeoJSON decoding rule.
//!
//! Decoding stops at the first violation; the returned error names the construct that caused it.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoJsonError>;

#[derive(Debug, Error)]
pub enum GeoJsonError {
	/// The input text is not well-formed JSON.
	#[error("invalid JSON: {0}")]
	JsonSyntax(#[from] serde_json::Error),

	#[error("{0}")]
	MalformedDocument(String),

	#[error("{0}")]
	MalformedFeature(String),

	#[error("{0}")]
	MalformedGeometry(String),

	/// Carries the offending `type` string.
	#[error("geometry type '{0}' is not supported")]
	UnsupportedGeometryType(String),

	#[error("{0}")]
	InvalidIdentifier(String),

	/// A rule was handed a JSON node of the wrong kind.
	#[error("{0}")]
	TypeError(String),
}

/// Payload-free discriminant of [`GeoJsonError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	JsonSyntax,
	MalformedDocument,
	MalformedFeature,
	MalformedGeometry,
	UnsupportedGeometryType,
	InvalidIdentifier,
	TypeError,
}

impl GeoJsonError {
	#[must_use]
	pub fn kind(&self) -> ErrorKind {
		match self {
			GeoJsonError::JsonSyntax(_) => ErrorKind::JsonSyntax,
			GeoJsonError::MalformedDocument(_) => ErrorKind::MalformedDocument,
			GeoJsonError::MalformedFeature(_) => ErrorKind::MalformedFeature,
			GeoJsonError::MalformedGeometry(_) => ErrorKind::MalformedGeometry,
			GeoJsonError::UnsupportedGeometryType(_) => ErrorKind::UnsupportedGeometryType,
			GeoJsonError::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
			GeoJsonError::TypeError(_) => ErrorKind::TypeError,
		}
	}
}

/// Returns early with the given error variant and a formatted message.
#[macro_export]
macro_rules! fail {
	($variant:ident, $($arg:tt)*) => {
		return Err($crate::GeoJsonError::$variant(format!($($arg)*)))
	};
}
