pub mod hand;
pub mod part;
pub mod point;

pub use hand::HandLandmarkIndex;
pub use part::{part_at_column, BodyPart, COORDINATE_ROWS, TOTAL_COLUMNS};
pub use point::{Landmark, LandmarkList};
