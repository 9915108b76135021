use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::PackerConfig;
use crate::error::{PackError, Result};
use crate::landmark::{BodyPart, Landmark, LandmarkList};
use crate::matrix::LandmarkMatrix;
use crate::normalize::AspectScale;
use crate::observer::{PackObserver, PackSummary, TracingObserver};
use crate::step::{ImageSize, LandmarkStep, ModelInputStage};

/// How a present list whose length differs from the part's size is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Any mismatch is a `LengthMismatch` error
    #[default]
    Strict,
    /// Longer lists keep their first `part.len()` points (e.g. the 478-point
    /// face mesh with iris refinement). Shorter lists are still an error.
    Truncate,
}

impl LengthPolicy {
    fn accept<'a>(self, part: BodyPart, list: &'a LandmarkList) -> Result<&'a [Landmark]> {
        let expected = part.len();
        let actual = list.len();
        let fits = match self {
            LengthPolicy::Strict => actual == expected,
            LengthPolicy::Truncate => actual >= expected,
        };
        if !fits {
            return Err(PackError::LengthMismatch {
                part,
                expected,
                actual,
            });
        }
        Ok(&list.landmarks[..expected])
    }
}

/// Packs face, left hand, pose and right hand landmarks into one 3x543 matrix.
///
/// Stateless: every call allocates its own matrix, so one packer can be
/// shared across threads and frames.
#[derive(Clone)]
pub struct LandmarkPacker {
    normalize_aspect_ratio: bool,
    length_policy: LengthPolicy,
    observer: Arc<dyn PackObserver>,
}

impl Default for LandmarkPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LandmarkPacker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LandmarkPacker")
            .field("normalize_aspect_ratio", &self.normalize_aspect_ratio)
            .field("length_policy", &self.length_policy)
            .finish_non_exhaustive()
    }
}

impl LandmarkPacker {
    /// No normalization, strict lengths, logs through `tracing`
    pub fn new() -> Self {
        Self {
            normalize_aspect_ratio: false,
            length_policy: LengthPolicy::Strict,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn from_config(config: &PackerConfig) -> Self {
        Self::new()
            .with_normalization(config.normalize_aspect_ratio)
            .with_length_policy(config.length_policy)
    }

    pub fn with_normalization(mut self, enabled: bool) -> Self {
        self.normalize_aspect_ratio = enabled;
        self
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn PackObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn normalizes(&self) -> bool {
        self.normalize_aspect_ratio
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    /// Packs one step.
    ///
    /// Absent parts become NaN columns. Present parts are copied column by
    /// column at their fixed offset, untransformed unless normalization is
    /// enabled. On error no matrix is produced.
    pub fn pack(
        &self,
        face: Option<&LandmarkList>,
        left_hand: Option<&LandmarkList>,
        pose: Option<&LandmarkList>,
        right_hand: Option<&LandmarkList>,
        image_size: Option<ImageSize>,
    ) -> Result<LandmarkMatrix> {
        // same order as BodyPart::ALL
        let inputs = [face, left_hand, pose, right_hand];

        match self.pack_parts(&inputs, image_size) {
            Ok(matrix) => {
                self.observer.on_packed(&PackSummary {
                    landmark_counts: inputs.map(|list| list.map(LandmarkList::len)),
                    normalized: self.normalize_aspect_ratio,
                });
                Ok(matrix)
            }
            Err(e) => {
                self.observer.on_rejected(&e);
                Err(e)
            }
        }
    }

    fn pack_parts(
        &self,
        inputs: &[Option<&LandmarkList>; BodyPart::COUNT],
        image_size: Option<ImageSize>,
    ) -> Result<LandmarkMatrix> {
        let scale = if self.normalize_aspect_ratio {
            let size = image_size.ok_or(PackError::MissingImageSize)?;
            Some(AspectScale::from_image_size(size)?)
        } else {
            None
        };

        // validate every part before writing anything
        let mut accepted: [Option<&[Landmark]>; BodyPart::COUNT] = [None; BodyPart::COUNT];
        for part in BodyPart::ALL {
            let idx = part as usize;
            accepted[idx] = inputs[idx]
                .map(|list| self.length_policy.accept(part, list))
                .transpose()?;
        }

        let mut matrix = LandmarkMatrix::allocate();
        for part in BodyPart::ALL {
            match (accepted[part as usize], scale) {
                (None, _) => matrix.clear_part(part),
                (Some(landmarks), None) => matrix.write_part(part, landmarks.iter().copied()),
                (Some(landmarks), Some(scale)) => {
                    matrix.write_part(part, landmarks.iter().map(|lm| scale.apply(lm)))
                }
            }
        }

        Ok(matrix)
    }
}

impl ModelInputStage for LandmarkPacker {
    fn process(&self, step: &LandmarkStep) -> Result<LandmarkMatrix> {
        self.pack(
            step.face.as_ref(),
            step.left_hand.as_ref(),
            step.pose.as_ref(),
            step.right_hand.as_ref(),
            step.image_size,
        )
    }
}
