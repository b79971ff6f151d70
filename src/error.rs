use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("expected {expected} values, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },

	#[error("expected {expected} joints, got {actual}")]
	JointCount { expected: usize, actual: usize },

	#[error("channel shape {actual:?} does not match {expected:?}")]
	ShapeMismatch {
		expected: (usize, usize),
		actual: (usize, usize),
	},

	#[error("image dimensions {width}x{height} are out of range")]
	DimensionOverflow { width: usize, height: usize },

	#[error("at least one channel is required")]
	NoChannels,

	#[error("joint {joint} has a non-finite coordinate")]
	NonFinite { joint: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
