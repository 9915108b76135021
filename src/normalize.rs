//! Aspect-ratio normalization of normalized image coordinates.
//!
//! Landmarks come out of the detector normalized independently per axis, so
//! on a non-square frame one unit of x and one unit of y cover different pixel
//! distances. This rescales both axes around the image center by
//! `dimension / max(width, height)`. It is not part of the default packing
//! path; enable it with `normalize_aspect_ratio` or call it directly.

use crate::error::{PackError, Result};
use crate::landmark::{Landmark, LandmarkList};
use crate::step::ImageSize;

/// Per-axis scale factors derived from an image size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectScale {
    pub width_scale: f32,
    pub height_scale: f32,
}

impl AspectScale {
    /// Fails with `InvalidGeometry` unless both dimensions are positive
    pub fn from_image_size(size: ImageSize) -> Result<Self> {
        let ImageSize { width, height } = size;
        let max_dim = width.max(height);
        if max_dim <= 0 || width <= 0 || height <= 0 {
            return Err(PackError::InvalidGeometry { width, height });
        }

        let max_dim = max_dim as f32;
        Ok(Self {
            width_scale: width as f32 / max_dim,
            height_scale: height as f32 / max_dim,
        })
    }

    /// Scale x and y around 0.5. z is left as is.
    pub fn apply(&self, landmark: &Landmark) -> Landmark {
        Landmark {
            x: (landmark.x - 0.5) * self.width_scale + 0.5,
            y: (landmark.y - 0.5) * self.height_scale + 0.5,
            z: landmark.z,
        }
    }
}

pub fn normalize_landmarks(list: &LandmarkList, size: ImageSize) -> Result<LandmarkList> {
    let scale = AspectScale::from_image_size(size)?;
    Ok(list.iter().map(|lm| scale.apply(lm)).collect())
}
