use super::GeoProperties;
use std::fmt::{Debug, Display};

/// A property value of a feature. Can hold any JSON-derived scalar or nested structure.
///
/// Numbers keep the narrowest lossless tag: `UInt` for non-negative integers, `Int` for
/// negative integers, `Double` for everything else.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Null,
	Bool(bool),
	UInt(u64),
	Int(i64),
	Double(f64),
	String(String),
	Array(Vec<GeoValue>),
	Object(GeoProperties),
}

impl GeoValue {
	/// Return the value type as a lowercase string (`"uint"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		match self {
			GeoValue::Null => "null",
			GeoValue::Bool(_) => "bool",
			GeoValue::UInt(_) => "uint",
			GeoValue::Int(_) => "int",
			GeoValue::Double(_) => "double",
			GeoValue::String(_) => "string",
			GeoValue::Array(_) => "array",
			GeoValue::Object(_) => "object",
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	#[must_use]
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			GeoValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			GeoValue::UInt(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			GeoValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns any numeric value widened to `f64`.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::UInt(v) => Some(*v as f64),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::Double(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(v) => Some(v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_array(&self) -> Option<&[GeoValue]> {
		match self {
			GeoValue::Array(v) => Some(v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_object(&self) -> Option<&GeoProperties> {
		match self {
			GeoValue::Object(v) => Some(v),
			_ => None,
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Array(v) => f.debug_list().entries(v).finish(),
			Self::Object(v) => v.fmt(f),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Null => write!(f, "null"),
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::String(v) => write!(f, "{v}"),
			GeoValue::Array(v) => write!(f, "[{} values]", v.len()),
			GeoValue::Object(v) => write!(f, "{{{} entries}}", v.len()),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		if value < 0 {
			GeoValue::Int(value)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<Vec<GeoValue>> for GeoValue {
	fn from(value: Vec<GeoValue>) -> Self {
		GeoValue::Array(value)
	}
}

impl From<GeoProperties> for GeoValue {
	fn from(value: GeoProperties) -> Self {
		GeoValue::Object(value)
	}
}
