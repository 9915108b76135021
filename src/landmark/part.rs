use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 出力行列の行数 (x, y, z)
pub const COORDINATE_ROWS: usize = 3;

/// 出力行列の列数 (顔 468 + 左手 21 + 姿勢 33 + 右手 21)
pub const TOTAL_COLUMNS: usize = 543;

/// 出力行列上の部位。並び順がそのまま列の並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum BodyPart {
    Face = 0,
    LeftHand = 1,
    Pose = 2,
    RightHand = 3,
}

impl BodyPart {
    pub const COUNT: usize = 4;

    /// 列の並び順
    pub const ALL: [BodyPart; BodyPart::COUNT] = [
        BodyPart::Face,
        BodyPart::LeftHand,
        BodyPart::Pose,
        BodyPart::RightHand,
    ];

    /// 部位ごとのランドマーク数
    pub const fn len(self) -> usize {
        match self {
            BodyPart::Face => 468,
            BodyPart::LeftHand => 21,
            BodyPart::Pose => 33,
            BodyPart::RightHand => 21,
        }
    }

    /// 先頭列
    pub const fn offset(self) -> usize {
        match self {
            BodyPart::Face => 0,
            BodyPart::LeftHand => 468,
            BodyPart::Pose => 489,
            BodyPart::RightHand => 522,
        }
    }

    pub const fn columns(self) -> Range<usize> {
        self.offset()..self.offset() + self.len()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Face => "face",
            BodyPart::LeftHand => "left_hand",
            BodyPart::Pose => "pose",
            BodyPart::RightHand => "right_hand",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 列番号から部位を逆引き
pub fn part_at_column(column: usize) -> Option<BodyPart> {
    BodyPart::ALL
        .into_iter()
        .find(|part| part.columns().contains(&column))
}
