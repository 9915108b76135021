use ndarray::{s, Array2, ArrayView1, ArrayView2, Axis};

use crate::landmark::{part_at_column, BodyPart, Landmark, COORDINATE_ROWS, TOTAL_COLUMNS};

/// Packed model input: 3 rows (x, y, z) by 543 columns.
///
/// Column ranges per part are fixed (see [`BodyPart::columns`]). A column is
/// either fully real or fully NaN, so a single NaN check on any row tells
/// whether the part was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkMatrix {
    data: Array2<f32>,
}

impl LandmarkMatrix {
    pub const SHAPE: (usize, usize) = (COORDINATE_ROWS, TOTAL_COLUMNS);

    /// Every cell still has to be written by `write_part` or `clear_part`.
    pub(crate) fn allocate() -> Self {
        Self {
            data: Array2::zeros(Self::SHAPE),
        }
    }

    /// All parts absent
    pub fn filled_with_nan() -> Self {
        Self {
            data: Array2::from_elem(Self::SHAPE, f32::NAN),
        }
    }

    /// Copies `landmarks` into the part's columns. The caller has already
    /// checked that `landmarks.len() == part.len()`.
    pub(crate) fn write_part<I>(&mut self, part: BodyPart, landmarks: I)
    where
        I: IntoIterator<Item = Landmark>,
    {
        let offset = part.offset();
        for (i, lm) in landmarks.into_iter().take(part.len()).enumerate() {
            let col = offset + i;
            self.data[[0, col]] = lm.x;
            self.data[[1, col]] = lm.y;
            self.data[[2, col]] = lm.z;
        }
    }

    /// Writes the NaN sentinel into every row of the part's columns
    pub(crate) fn clear_part(&mut self, part: BodyPart) {
        let range = part.columns();
        self.data
            .slice_mut(s![.., range.start..range.end])
            .fill(f32::NAN);
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f32> {
        self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get([row, col]).copied()
    }

    /// (x, y, z) of one column
    pub fn column(&self, col: usize) -> Option<[f32; 3]> {
        if col >= TOTAL_COLUMNS {
            return None;
        }
        Some([
            self.data[[0, col]],
            self.data[[1, col]],
            self.data[[2, col]],
        ])
    }

    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, f32>> {
        (row < COORDINATE_ROWS).then(|| self.data.index_axis(Axis(0), row))
    }

    /// 3 x part.len() view over the part's columns
    pub fn part_view(&self, part: BodyPart) -> ArrayView2<'_, f32> {
        let range = part.columns();
        self.data.slice(s![.., range.start..range.end])
    }

    /// Single NaN check on row 0 of the part's first column
    pub fn is_part_present(&self, part: BodyPart) -> bool {
        !self.data[[0, part.offset()]].is_nan()
    }

    pub fn present_parts(&self) -> Vec<BodyPart> {
        BodyPart::ALL
            .into_iter()
            .filter(|p| self.is_part_present(*p))
            .collect()
    }

    /// 543 x 3 layout, one row per landmark
    pub fn to_frame_major(&self) -> Array2<f32> {
        self.data.t().as_standard_layout().into_owned()
    }

    /// Pixel positions of all detected columns, for drawing an overlay
    pub fn visible_pixels(&self, width: u32, height: u32) -> Vec<(usize, (i32, i32))> {
        (0..TOTAL_COLUMNS)
            .filter(|&col| part_at_column(col).is_some_and(|p| self.is_part_present(p)))
            .map(|col| {
                let lm = Landmark::new(self.data[[0, col]], self.data[[1, col]], self.data[[2, col]]);
                (col, lm.to_pixel(width, height))
            })
            .collect()
    }

    /// Nested rows with NaN mapped to `None` (JSON has no NaN)
    pub fn to_nested(&self, frame_major: bool) -> Vec<Vec<Option<f32>>> {
        let view = if frame_major { self.data.t() } else { self.data.view() };
        view.outer_iter()
            .map(|line| {
                line.iter()
                    .map(|v| if v.is_nan() { None } else { Some(*v) })
                    .collect()
            })
            .collect()
    }
}
