//! One processing step as the host pipeline hands it to the packer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::landmark::{BodyPart, LandmarkList};
use crate::matrix::LandmarkMatrix;

/// Source frame size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: i32,
    pub height: i32,
}

impl ImageSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Inputs of a single step. `None` means the part was not detected this step,
/// which is distinct from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkStep {
    #[serde(default)]
    pub face: Option<LandmarkList>,
    #[serde(default)]
    pub left_hand: Option<LandmarkList>,
    #[serde(default)]
    pub pose: Option<LandmarkList>,
    #[serde(default)]
    pub right_hand: Option<LandmarkList>,
    #[serde(default)]
    pub image_size: Option<ImageSize>,
}

impl LandmarkStep {
    pub fn part(&self, part: BodyPart) -> Option<&LandmarkList> {
        match part {
            BodyPart::Face => self.face.as_ref(),
            BodyPart::LeftHand => self.left_hand.as_ref(),
            BodyPart::Pose => self.pose.as_ref(),
            BodyPart::RightHand => self.right_hand.as_ref(),
        }
    }

    pub fn set_part(&mut self, part: BodyPart, list: Option<LandmarkList>) {
        match part {
            BodyPart::Face => self.face = list,
            BodyPart::LeftHand => self.left_hand = list,
            BodyPart::Pose => self.pose = list,
            BodyPart::RightHand => self.right_hand = list,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse landmark step")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&content)
    }
}

/// Per-step interface the host invokes: four optional inputs and an image
/// size in, one matrix or an error out. Implementations keep no state
/// between steps.
pub trait ModelInputStage {
    fn process(&self, step: &LandmarkStep) -> crate::error::Result<LandmarkMatrix>;
}
