use super::Coordinates;

/// A sequence of connected positions. Closure is not required.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

crate::impl_composite_geometry!(LineStringGeometry, Coordinates);
crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn push_and_len() {
		let mut line = LineStringGeometry::new();
		assert!(line.is_empty());
		line.push(Coordinates::new(0.0, 0.0));
		line.push(Coordinates::new(1.0, 1.0));
		assert_eq!(line.len(), 2);
		assert_eq!(line, LineStringGeometry::from(&[[0, 0], [1, 1]]));
	}
}
