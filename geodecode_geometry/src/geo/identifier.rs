use std::fmt::Display;

/// Identifier of a feature. Either a number or a string, never null.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoIdentifier {
	UInt(u64),
	Int(i64),
	Double(f64),
	String(String),
}

impl Display for GeoIdentifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoIdentifier::UInt(v) => write!(f, "{v}"),
			GeoIdentifier::Int(v) => write!(f, "{v}"),
			GeoIdentifier::Double(v) => write!(f, "{v}"),
			GeoIdentifier::String(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for GeoIdentifier {
	fn from(value: &str) -> Self {
		GeoIdentifier::String(value.to_string())
	}
}

impl From<String> for GeoIdentifier {
	fn from(value: String) -> Self {
		GeoIdentifier::String(value)
	}
}

impl From<u64> for GeoIdentifier {
	fn from(value: u64) -> Self {
		GeoIdentifier::UInt(value)
	}
}

impl From<i64> for GeoIdentifier {
	fn from(value: i64) -> Self {
		if value < 0 {
			GeoIdentifier::Int(value)
		} else {
			GeoIdentifier::UInt(value as u64)
		}
	}
}

impl From<f64> for GeoIdentifier {
	fn from(value: f64) -> Self {
		GeoIdentifier::Double(value)
	}
}
