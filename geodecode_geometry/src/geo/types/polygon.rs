use super::RingGeometry;
use std::fmt::Debug;

/// An outer ring plus any number of inner rings (holes).
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	outer: RingGeometry,
	inners: Vec<RingGeometry>,
}

impl PolygonGeometry {
	#[must_use]
	pub fn new(outer: RingGeometry, inners: Vec<RingGeometry>) -> Self {
		Self { outer, inners }
	}

	/// Builds a polygon from rings in GeoJSON order: the first ring is the outer ring, the
	/// remaining rings become inner rings by position. Returns `None` if `rings` is empty.
	#[must_use]
	pub fn from_rings(rings: Vec<RingGeometry>) -> Option<Self> {
		let mut iter = rings.into_iter();
		let outer = iter.next()?;
		Some(Self::new(outer, iter.collect()))
	}

	#[must_use]
	pub fn outer(&self) -> &RingGeometry {
		&self.outer
	}

	#[must_use]
	pub fn inners(&self) -> &[RingGeometry] {
		&self.inners
	}

	/// Iterates over all rings, outer ring first.
	pub fn rings(&self) -> impl Iterator<Item = &RingGeometry> {
		std::iter::once(&self.outer).chain(self.inners.iter())
	}

	#[must_use]
	pub fn into_rings(self) -> Vec<RingGeometry> {
		let mut rings = Vec::with_capacity(self.inners.len() + 1);
		rings.push(self.outer);
		rings.extend(self.inners);
		rings
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.rings()).finish()
	}
}
