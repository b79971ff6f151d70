//! Conversions between [`ColorChannel`] planes and row-major pixel buffers.

use itertools::iproduct;
use tracing::debug;

use crate::error::{Error, Result};
use crate::prelude::*;

fn check_len(expected: usize, actual: usize) -> Result<()> {
	if expected != actual {
		debug!(expected, actual, "rejecting pixel buffer");
		return Err(Error::LengthMismatch { expected, actual });
	}
	Ok(())
}

/// Number of bytes in a `width` by `height` buffer with `channels` per pixel.
fn buffer_len(width: usize, height: usize, channels: usize) -> Result<usize> {
	width
		.checked_mul(height)
		.and_then(|n| n.checked_mul(channels))
		.ok_or_else(|| {
			debug!(width, height, channels, "pixel buffer size overflows");
			Error::DimensionOverflow { width, height }
		})
}

/// Wraps a row-major buffer of `width * height` bytes.
pub fn from_raw(width: usize, height: usize, data: &[u8]) -> Result<ColorChannel> {
	check_len(buffer_len(width, height, 1)?, data.len())?;
	Ok(ColorChannel::from_row_slice(height, width, data))
}

/// Row-major bytes of a channel, the inverse of [`from_raw`].
pub fn to_raw(channel: &ColorChannel) -> Vec<u8> {
	channel.transpose().as_slice().to_vec()
}

/// Splits a pixel-interleaved buffer into one plane per component.
pub fn split_interleaved(
	width: usize,
	height: usize,
	channels: usize,
	data: &[u8],
) -> Result<Vec<ColorChannel>> {
	if channels == 0 {
		return Err(Error::NoChannels);
	}
	check_len(buffer_len(width, height, channels)?, data.len())?;

	Ok((0..channels)
		.map(|k| ColorChannel::from_fn(height, width, |r, c| data[(r * width + c) * channels + k]))
		.collect())
}

/// Interleaves equally sized planes, the inverse of [`split_interleaved`].
pub fn merge_interleaved(planes: &[ColorChannel]) -> Result<Vec<u8>> {
	let first = planes.first().ok_or(Error::NoChannels)?;
	let expected = first.shape();
	if let Some(bad) = planes.iter().find(|p| p.shape() != expected) {
		debug!(?expected, actual = ?bad.shape(), "channel shapes differ");
		return Err(Error::ShapeMismatch {
			expected,
			actual: bad.shape(),
		});
	}

	let (height, width) = expected;
	let mut data = Vec::with_capacity(height * width * planes.len());
	for (r, c) in iproduct!(0..height, 0..width) {
		data.extend(planes.iter().map(|p| p[(r, c)]));
	}
	Ok(data)
}

#[cfg(feature = "image")]
mod image_support {
	use image::{GrayImage, RgbImage};

	use super::*;

	fn image_dimensions(channel: &ColorChannel) -> Result<(u32, u32)> {
		let (height, width) = channel.shape();
		match (u32::try_from(width), u32::try_from(height)) {
			(Ok(w), Ok(h)) => Ok((w, h)),
			_ => {
				debug!(width, height, "channel too large for an image");
				Err(Error::DimensionOverflow { width, height })
			}
		}
	}

	/// The image buffer may be longer than its pixels; trailing bytes are ignored.
	pub fn from_gray_image(image: &GrayImage) -> ColorChannel {
		let (width, height) = image.dimensions();
		let (width, height) = (width as usize, height as usize);
		ColorChannel::from_row_slice(height, width, &image.as_raw()[..width * height])
	}

	pub fn to_gray_image(channel: &ColorChannel) -> Result<GrayImage> {
		let (width, height) = image_dimensions(channel)?;
		let data = to_raw(channel);
		let actual = data.len();
		GrayImage::from_raw(width, height, data).ok_or(Error::LengthMismatch {
			expected: channel.len(),
			actual,
		})
	}

	/// Splits an RGB image into its red, green and blue planes.
	pub fn from_rgb_image(image: &RgbImage) -> [ColorChannel; 3] {
		let (width, height) = image.dimensions();
		let (width, height, raw) = (width as usize, height as usize, image.as_raw());
		[0, 1, 2].map(|k| {
			ColorChannel::from_fn(height, width, |r, c| raw[(r * width + c) * 3 + k])
		})
	}

	pub fn to_rgb_image(planes: &[ColorChannel; 3]) -> Result<RgbImage> {
		let data = merge_interleaved(planes)?;
		let (width, height) = image_dimensions(&planes[0])?;
		let actual = data.len();
		RgbImage::from_raw(width, height, data).ok_or(Error::LengthMismatch {
			expected: planes[0].len() * 3,
			actual,
		})
	}

}

#[cfg(feature = "image")]
pub use image_support::*;
