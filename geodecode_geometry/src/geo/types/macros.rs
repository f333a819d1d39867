/// Implements `From` conversions from vectors, slices and arrays for a tuple-struct geometry
/// whose items can be built from the source elements.
#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(|v| <$i>::from(v)).collect())
			}
		}
	)*}
}

/// Implements [`CompositeGeometryTrait`](super::CompositeGeometryTrait) and a list-style `Debug`
/// for a tuple-struct geometry wrapping a `Vec` of items.
#[macro_export]
macro_rules! impl_composite_geometry {
	($($t:ty,$i:ty),*) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn new() -> Self {
				Self(Vec::new())
			}
			fn as_vec(&self) -> &Vec<$i> {
				&self.0
			}
			fn as_mut_vec(&mut self) -> &mut Vec<$i> {
				&mut self.0
			}
			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	)*}
}
