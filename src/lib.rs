pub mod config;
pub mod error;
pub mod landmark;
pub mod logging;
pub mod matrix;
pub mod normalize;
pub mod observer;
pub mod packer;
pub mod step;

pub use error::{PackError, Result};
pub use landmark::{BodyPart, HandLandmarkIndex, Landmark, LandmarkList};
pub use matrix::LandmarkMatrix;
pub use normalize::{normalize_landmarks, AspectScale};
pub use observer::{NullObserver, PackObserver, PackSummary, TracingObserver};
pub use packer::{LandmarkPacker, LengthPolicy};
pub use step::{ImageSize, LandmarkStep, ModelInputStage};
