use nalgebra::DMatrix;

use crate::prelude::*;

/// Joint coordinates of one pose, one joint per row.
pub type Skeleton = Matrix<f64, NUM_POSE, DIM>;

/// A single 8-bit image plane. Rows are image rows, so `nrows()` is the height.
pub type ColorChannel = DMatrix<u8>;

#[cfg(test)]
mod tests {
	use super::*;
	use nalgebra::{Dim, Dynamic};

	#[test]
	fn skeleton_shape_is_static() {
		let s = Skeleton::zeros();
		assert_eq!(s.shape(), (NUM_POSE, DIM));
		let (rows, cols) = s.shape_generic();
		assert_eq!(rows.value(), NUM_POSE);
		assert_eq!(cols.value(), DIM);
		assert_eq!(std::mem::size_of::<Skeleton>(), NUM_POSE * DIM * 8);
	}

	#[test]
	fn color_channel_shape_is_dynamic() {
		let c = ColorChannel::zeros(4, 7);
		assert_eq!(c.shape(), (4, 7));
		let (rows, cols): (Dynamic, Dynamic) = c.shape_generic();
		assert_eq!((rows.value(), cols.value()), (4, 7));

		let empty = ColorChannel::zeros(0, 0);
		assert!(empty.is_empty());
	}
}
