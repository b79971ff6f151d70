use std::ops::RangeInclusive;

use crate::prelude::*;
use nalgebra::Const;
use proptest::prelude::*;

const MAX_EXTENT: usize = 12;

fn scalar() -> RangeInclusive<f64> {
	-2.0..=2.0
}

pub fn joint_vector() -> impl Strategy<Value = Vector<f64, DIM>> {
	nalgebra::proptest::matrix(scalar(), Const::<DIM>, Const::<1>)
}

pub fn skeleton() -> impl Strategy<Value = Skeleton> {
	nalgebra::proptest::matrix(scalar(), Const::<NUM_POSE>, Const::<DIM>)
}

/// A channel of arbitrary bytes, possibly empty along either axis.
pub fn color_channel() -> impl Strategy<Value = ColorChannel> {
	nalgebra::proptest::matrix(any::<u8>(), 0..=MAX_EXTENT, 0..=MAX_EXTENT)
}

/// Between one and `max_planes` channels sharing a single shape.
pub fn color_channels(max_planes: usize) -> impl Strategy<Value = Vec<ColorChannel>> {
	(0..=MAX_EXTENT, 0..=MAX_EXTENT, 1..=max_planes).prop_flat_map(|(rows, cols, n)| {
		proptest::collection::vec(
			nalgebra::proptest::matrix(any::<u8>(), rows..=rows, cols..=cols),
			n,
		)
	})
}
