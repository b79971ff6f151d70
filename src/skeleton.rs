//! Construction and inspection of [`Skeleton`] poses.
//!
//! A skeleton is stored joint-major: row `i` is joint `i` and its `DIM`
//! coordinates run along the columns. Flat buffers use the same order,
//! `[j0x, j0y, j0z, j1x, ...]`.

use tracing::debug;

use crate::error::{Error, Result};
use crate::prelude::*;

/// Builds a skeleton from a joint-major flat buffer of `NUM_POSE * DIM` values.
pub fn from_row_slice(data: &[f64]) -> Result<Skeleton> {
	let expected = NUM_POSE * DIM;
	if data.len() != expected {
		debug!(expected, actual = data.len(), "rejecting skeleton buffer");
		return Err(Error::LengthMismatch {
			expected,
			actual: data.len(),
		});
	}
	Ok(Skeleton::from_row_slice(data))
}

/// Builds a skeleton from exactly `NUM_POSE` joints.
pub fn from_joints<I>(joints: I) -> Result<Skeleton>
where
	I: IntoIterator<Item = [f64; DIM]>,
{
	let mut skeleton = Skeleton::zeros();
	let mut count = 0;
	for joint in joints {
		if count < NUM_POSE {
			for (j, v) in joint.into_iter().enumerate() {
				skeleton[(count, j)] = v;
			}
		}
		count += 1;
	}
	if count != NUM_POSE {
		debug!(expected = NUM_POSE, actual = count, "rejecting joint list");
		return Err(Error::JointCount {
			expected: NUM_POSE,
			actual: count,
		});
	}
	Ok(skeleton)
}

/// Flattens a skeleton back into the layout accepted by [`from_row_slice`].
pub fn to_row_vec(skeleton: &Skeleton) -> Vec<f64> {
	skeleton.transpose().as_slice().to_vec()
}

pub fn joint(skeleton: &Skeleton, i: usize) -> Option<Vector<f64, DIM>> {
	if i >= NUM_POSE {
		return None;
	}
	Some(skeleton.row(i).transpose())
}

/// Mean position over all joints.
pub fn centroid(skeleton: &Skeleton) -> Vector<f64, DIM> {
	skeleton.row_mean().transpose()
}

/// Fails on the first joint holding a NaN or infinite coordinate.
pub fn validate(skeleton: &Skeleton) -> Result<()> {
	for (joint, row) in skeleton.row_iter().enumerate() {
		if !row.iter().all(|v| v.is_finite()) {
			debug!(joint, "skeleton has a non-finite coordinate");
			return Err(Error::NonFinite { joint });
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::proptest::*;
	use approx::assert_relative_eq;
	use proptest::prelude::*;

	#[test]
	fn from_row_slice_is_joint_major() {
		let data = (0..NUM_POSE * DIM).map(|v| v as f64).collect::<Vec<_>>();
		let s = from_row_slice(&data).unwrap();
		assert_eq!(s[(0, 0)], 0.0);
		assert_eq!(s[(0, DIM - 1)], (DIM - 1) as f64);
		assert_eq!(s[(1, 0)], DIM as f64);
		assert_eq!(to_row_vec(&s), data);
	}

	#[test]
	fn from_row_slice_rejects_wrong_length() {
		let data = vec![0.0; NUM_POSE * DIM - 1];
		assert_eq!(
			from_row_slice(&data),
			Err(Error::LengthMismatch {
				expected: NUM_POSE * DIM,
				actual: NUM_POSE * DIM - 1,
			})
		);
	}

	#[test]
	fn from_joints_counts_joints() {
		let too_few = std::iter::repeat([1.0; DIM]).take(NUM_POSE - 1);
		assert_eq!(
			from_joints(too_few),
			Err(Error::JointCount {
				expected: NUM_POSE,
				actual: NUM_POSE - 1,
			})
		);

		let too_many = std::iter::repeat([1.0; DIM]).take(NUM_POSE + 2);
		assert_eq!(
			from_joints(too_many),
			Err(Error::JointCount {
				expected: NUM_POSE,
				actual: NUM_POSE + 2,
			})
		);

		let exact = (0..NUM_POSE).map(|i| [i as f64; DIM]);
		let s = from_joints(exact).unwrap();
		let last = Vector::<f64, DIM>::repeat((NUM_POSE - 1) as f64);
		assert_eq!(joint(&s, NUM_POSE - 1), Some(last));
	}

	#[test]
	fn joint_out_of_range() {
		assert_eq!(joint(&Skeleton::zeros(), NUM_POSE), None);
	}

	#[test]
	fn validate_reports_first_bad_joint() {
		let mut s = Skeleton::zeros();
		assert_eq!(validate(&s), Ok(()));
		s[(5, 1)] = f64::INFINITY;
		s[(9, 0)] = f64::NAN;
		assert_eq!(validate(&s), Err(Error::NonFinite { joint: 5 }));
	}

	proptest! {
		#[test]
		fn centroid_of_translated_skeleton(s in skeleton(), offset in joint_vector()) {
			let mut moved = s;
			for mut row in moved.row_iter_mut() {
				row += offset.transpose();
			}
			assert_relative_eq!(centroid(&moved), centroid(&s) + offset, epsilon = 1e-10);
		}

		#[test]
		fn row_vec_round_trip(s in skeleton()) {
			prop_assert_eq!(from_row_slice(&to_row_vec(&s)), Ok(s));
		}

		#[test]
		fn joints_match_rows(s in skeleton()) {
			for i in 0..NUM_POSE {
				let j = joint(&s, i).unwrap();
				for k in 0..DIM {
					prop_assert_eq!(j[k], s[(i, k)]);
				}
			}
		}
	}
}
