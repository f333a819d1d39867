use super::Coordinates;

/// A linear ring bounding a polygon or one of its holes.
///
/// A conforming ring repeats its first position as its last one; this is not enforced.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring is non-empty and its first and last positions are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

crate::impl_composite_geometry!(RingGeometry, Coordinates);
crate::impl_from_array!(RingGeometry, Coordinates);
