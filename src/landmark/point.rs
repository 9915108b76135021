use serde::{Deserialize, Serialize};

/// 単一ランドマーク
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// 正規化されたX座標 (通常 0.0〜1.0)
    pub x: f32,
    /// 正規化されたY座標 (通常 0.0〜1.0)
    pub y: f32,
    /// 深度 (x と同じスケール)
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 全座標が有限値か
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// ピクセル座標に変換
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        let px = (self.x * width as f32) as i32;
        let py = (self.y * height as f32) as i32;
        (px, py)
    }

    pub fn coords(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Landmark {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// 1部位ぶんのランドマーク列（順序が意味を持つ）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkList {
    pub landmarks: Vec<Landmark>,
}

impl LandmarkList {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// 同じ点を `len` 個並べたリスト
    pub fn filled(len: usize, landmark: Landmark) -> Self {
        Self {
            landmarks: vec![landmark; len],
        }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }
}

impl From<Vec<Landmark>> for LandmarkList {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

impl FromIterator<Landmark> for LandmarkList {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LandmarkList {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_to_pixel() {
        let lm = Landmark::new(0.5, 0.25, 0.0);
        let (px, py) = lm.to_pixel(640, 480);
        assert_eq!(px, 320);
        assert_eq!(py, 120);
    }

    #[test]
    fn test_landmark_is_finite() {
        assert!(Landmark::new(0.1, 0.2, 0.3).is_finite());
        assert!(!Landmark::new(f32::NAN, 0.2, 0.3).is_finite());
        assert!(!Landmark::new(0.1, 0.2, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_landmark_list_filled() {
        let list = LandmarkList::filled(21, Landmark::new(0.1, 0.2, 0.3));
        assert_eq!(list.len(), 21);
        assert_eq!(list.get(20), Some(&Landmark::new(0.1, 0.2, 0.3)));
        assert!(list.get(21).is_none());
    }

    #[test]
    fn test_landmark_list_deserialize_missing_z() {
        let list: LandmarkList =
            serde_json::from_str(r#"[{"x": 0.1, "y": 0.2}, {"x": 0.3, "y": 0.4, "z": -0.5}]"#)
                .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.landmarks[0].z, 0.0);
        assert_eq!(list.landmarks[1].z, -0.5);
    }
}
