//! Compile-time parameters of the shared matrix types.

/// Number of joints in a [`Skeleton`](crate::Skeleton).
pub const NUM_POSE: usize = 17;

/// Coordinates per joint.
pub const DIM: usize = 3;

const _: () = assert!(NUM_POSE > 0 && DIM > 0);
