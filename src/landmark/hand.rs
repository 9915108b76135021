use super::part::BodyPart;

/// 手の 21 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmarkIndex {
    pub const COUNT: usize = 21;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wrist),
            1 => Some(Self::ThumbCmc),
            2 => Some(Self::ThumbMcp),
            3 => Some(Self::ThumbIp),
            4 => Some(Self::ThumbTip),
            5 => Some(Self::IndexFingerMcp),
            6 => Some(Self::IndexFingerPip),
            7 => Some(Self::IndexFingerDip),
            8 => Some(Self::IndexFingerTip),
            9 => Some(Self::MiddleFingerMcp),
            10 => Some(Self::MiddleFingerPip),
            11 => Some(Self::MiddleFingerDip),
            12 => Some(Self::MiddleFingerTip),
            13 => Some(Self::RingFingerMcp),
            14 => Some(Self::RingFingerPip),
            15 => Some(Self::RingFingerDip),
            16 => Some(Self::RingFingerTip),
            17 => Some(Self::PinkyMcp),
            18 => Some(Self::PinkyPip),
            19 => Some(Self::PinkyDip),
            20 => Some(Self::PinkyTip),
            _ => None,
        }
    }

    /// 出力行列上の列番号。手以外の部位を渡すと None
    pub fn column(self, hand: BodyPart) -> Option<usize> {
        match hand {
            BodyPart::LeftHand | BodyPart::RightHand => Some(hand.offset() + self as usize),
            BodyPart::Face | BodyPart::Pose => None,
        }
    }
}
